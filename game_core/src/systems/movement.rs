use crate::{Config, Obstacle, Player, PlayerIntent, Time, Viewport};
use hecs::World;

/// Ease the player's velocity toward its intent and integrate position
pub fn move_player(world: &mut World, time: &Time, viewport: &Viewport, config: &Config) {
    let top = viewport.top_limit(config);
    let bottom = viewport.bottom_limit(config);

    for (_entity, (player, intent)) in world.query_mut::<(&mut Player, &PlayerIntent)>() {
        let target = config.target_velocity(intent.dir);
        let dv = target - player.vy;
        let max_step = config.acceleration * time.dt;
        player.vy += dv.clamp(-max_step, max_step);
        player.y += player.vy * time.dt;
        clamp_to_lane(player, top, bottom);
    }
}

/// Pull the player back inside the lane of `viewport` without integrating.
/// Used when the viewport changes while no physics step runs.
pub fn confine_player(world: &mut World, viewport: &Viewport, config: &Config) {
    let top = viewport.top_limit(config);
    let bottom = viewport.bottom_limit(config);
    for (_entity, player) in world.query_mut::<&mut Player>() {
        clamp_to_lane(player, top, bottom);
    }
}

// Clamp contact stops the node dead
fn clamp_to_lane(player: &mut Player, top: f32, bottom: f32) {
    if player.y < top {
        player.y = top;
        player.vy = 0.0;
    }
    if player.y > bottom {
        player.y = bottom;
        player.vy = 0.0;
    }
}

/// Scroll every obstacle toward the player
pub fn advance_obstacles(world: &mut World, time: &Time, world_speed: f32) {
    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        obstacle.x -= world_speed * time.dt;
    }
}
