use hecs::World;
use rand::Rng;

use crate::components::*;
use crate::resources::*;
use crate::{spawn_obstacle, Config, Viewport};

/// Accumulate spawn time and append a new obstacle at the right edge once the
/// timer passes a gap drawn from the current bounds.
#[allow(clippy::too_many_arguments)]
pub fn spawn_obstacles(
    world: &mut World,
    time: &Time,
    viewport: &Viewport,
    config: &Config,
    difficulty: &Difficulty,
    spawner: &mut Spawner,
    events: &mut Events,
    rng: &mut GameRng,
) {
    spawner.timer += time.dt;

    let gap = draw_gap(difficulty, rng);
    if spawner.timer < gap {
        return;
    }

    spawner.reset();
    let obstacle = roll_obstacle(viewport, config, rng);
    let seq = spawner.take_seq();
    tracing::debug!(seq, kind = ?obstacle.kind, y = obstacle.y, "spawn obstacle");
    spawn_obstacle(world, obstacle, seq);
    events.spawned += 1;
}

/// Spawn interval in seconds, uniform over the current gap bounds
pub fn draw_gap(difficulty: &Difficulty, rng: &mut GameRng) -> f32 {
    let lo = difficulty.gap_min;
    let hi = difficulty.gap_max.max(lo);
    rng.0.gen_range(lo..=hi)
}

/// Pick kind, slot and color for a fresh obstacle
pub fn roll_obstacle(viewport: &Viewport, config: &Config, rng: &mut GameRng) -> Obstacle {
    let top = viewport.top_limit(config);
    let bottom = viewport.bottom_limit(config).max(top);
    let y = rng.0.gen_range(top..=bottom);

    let kind = if rng.0.gen_bool(config.bar_chance) {
        ObstacleKind::Bar
    } else {
        ObstacleKind::Gate
    };
    let glow = Glow::PALETTE[rng.0.gen_range(0..Glow::PALETTE.len())];
    let h = match kind {
        ObstacleKind::Gate => config
            .gate_min_height
            .max(viewport.height * config.gate_height_ratio),
        ObstacleKind::Bar => config.bar_height,
    };

    Obstacle {
        kind,
        x: viewport.spawn_x(config),
        y,
        w: config.obstacle_width,
        h,
        glow,
        scored: false,
    }
}
