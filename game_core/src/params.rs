/// Game tuning parameters for Neon Waves
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Player node
    pub const PLAYER_X_RATIO: f32 = 0.38;
    pub const PLAYER_RADIUS: f32 = 16.0;
    pub const PLAYER_HITBOX: f32 = 32.0;
    pub const PLAYER_MAX_VELOCITY: f32 = 1000.0; // px/s
    pub const PLAYER_ACCELERATION: f32 = 3000.0; // px/s^2
    pub const INTENT_VELOCITY_SCALE: f32 = 0.7;

    // Lane (fractions of viewport height)
    pub const LANE_TOP_RATIO: f32 = 0.18;
    pub const LANE_BOTTOM_RATIO: f32 = 0.82;

    // World speed
    pub const BASE_SPEED: f32 = 400.0;
    pub const TIME_SPEED_RATE: f32 = 10.0;
    pub const TIME_SPEED_CAP: f32 = 400.0;
    pub const TIER_SPEED_BONUS: f32 = 50.0;
    pub const TIER_SCORE_STEP: u32 = 10;

    // Spawn gaps (seconds)
    pub const GAP_MIN_BASE: f32 = 0.9;
    pub const GAP_MIN_FLOOR: f32 = 0.5;
    pub const GAP_MIN_TIME_RATE: f32 = 0.01;
    pub const GAP_MAX_BASE: f32 = 1.5;
    pub const GAP_MAX_FLOOR: f32 = 0.8;
    pub const GAP_MAX_TIME_RATE: f32 = 0.015;
    pub const GAP_TIER_RATE: f32 = 0.05;

    // Obstacles
    pub const SPAWN_MARGIN: f32 = 40.0;
    pub const OBSTACLE_WIDTH: f32 = 22.0;
    pub const BAR_HEIGHT: f32 = 120.0;
    pub const BAR_CHANCE: f64 = 0.7;
    pub const GATE_HEIGHT_RATIO: f32 = 0.6;
    pub const GATE_MIN_HEIGHT: f32 = 120.0;
    pub const GATE_GAP_HALF_RATIO: f32 = 0.12;
    pub const GATE_GAP_HALF_MIN: f32 = 80.0;
    pub const PRUNE_X: f32 = -200.0;

    // Physics
    pub const MAX_DT: f32 = 0.033; // Clamp frame-drop spikes
}
