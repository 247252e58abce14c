use crate::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub player_x_ratio: f32,
    pub player_radius: f32,
    pub player_hitbox: f32,
    pub max_velocity: f32,
    pub acceleration: f32,
    pub intent_velocity_scale: f32,
    pub lane_top_ratio: f32,
    pub lane_bottom_ratio: f32,
    pub base_speed: f32,
    pub time_speed_rate: f32,
    pub time_speed_cap: f32,
    pub tier_speed_bonus: f32,
    pub tier_score_step: u32,
    pub gap_min_base: f32,
    pub gap_min_floor: f32,
    pub gap_min_time_rate: f32,
    pub gap_max_base: f32,
    pub gap_max_floor: f32,
    pub gap_max_time_rate: f32,
    pub gap_tier_rate: f32,
    pub spawn_margin: f32,
    pub obstacle_width: f32,
    pub bar_height: f32,
    pub bar_chance: f64,
    pub gate_height_ratio: f32,
    pub gate_min_height: f32,
    pub gate_gap_half_ratio: f32,
    pub gate_gap_half_min: f32,
    pub prune_x: f32,
    pub max_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_x_ratio: Params::PLAYER_X_RATIO,
            player_radius: Params::PLAYER_RADIUS,
            player_hitbox: Params::PLAYER_HITBOX,
            max_velocity: Params::PLAYER_MAX_VELOCITY,
            acceleration: Params::PLAYER_ACCELERATION,
            intent_velocity_scale: Params::INTENT_VELOCITY_SCALE,
            lane_top_ratio: Params::LANE_TOP_RATIO,
            lane_bottom_ratio: Params::LANE_BOTTOM_RATIO,
            base_speed: Params::BASE_SPEED,
            time_speed_rate: Params::TIME_SPEED_RATE,
            time_speed_cap: Params::TIME_SPEED_CAP,
            tier_speed_bonus: Params::TIER_SPEED_BONUS,
            tier_score_step: Params::TIER_SCORE_STEP,
            gap_min_base: Params::GAP_MIN_BASE,
            gap_min_floor: Params::GAP_MIN_FLOOR,
            gap_min_time_rate: Params::GAP_MIN_TIME_RATE,
            gap_max_base: Params::GAP_MAX_BASE,
            gap_max_floor: Params::GAP_MAX_FLOOR,
            gap_max_time_rate: Params::GAP_MAX_TIME_RATE,
            gap_tier_rate: Params::GAP_TIER_RATE,
            spawn_margin: Params::SPAWN_MARGIN,
            obstacle_width: Params::OBSTACLE_WIDTH,
            bar_height: Params::BAR_HEIGHT,
            bar_chance: Params::BAR_CHANCE,
            gate_height_ratio: Params::GATE_HEIGHT_RATIO,
            gate_min_height: Params::GATE_MIN_HEIGHT,
            gate_gap_half_ratio: Params::GATE_GAP_HALF_RATIO,
            gate_gap_half_min: Params::GATE_GAP_HALF_MIN,
            prune_x: Params::PRUNE_X,
            max_dt: Params::MAX_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Velocity the player eases toward for a given intent
    pub fn target_velocity(&self, dir: i8) -> f32 {
        dir as f32 * self.intent_velocity_scale * self.max_velocity
    }

    /// Half-height of the gate opening for a viewport height
    pub fn gate_gap_half(&self, viewport_height: f32) -> f32 {
        self.gate_gap_half_min
            .max(viewport_height * self.gate_gap_half_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_velocity_scaled_by_intent() {
        let config = Config::new();
        assert_eq!(config.target_velocity(-1), -700.0);
        assert_eq!(config.target_velocity(0), 0.0);
        assert_eq!(config.target_velocity(1), 700.0);
    }

    #[test]
    fn test_gate_gap_half_has_floor() {
        let config = Config::new();
        assert_eq!(config.gate_gap_half(400.0), 80.0, "Small screens use the floor");
        assert!((config.gate_gap_half(1000.0) - 120.0).abs() < 1e-3);
    }
}
