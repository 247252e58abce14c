use crate::{Config, Events, Obstacle, Player, Viewport};
use hecs::World;

/// Test the player's hit box against every obstacle's collision geometry.
/// One overlap is enough; several in the same frame count the same.
pub fn check_collisions(world: &World, viewport: &Viewport, config: &Config, events: &mut Events) {
    let player_y = {
        let mut query = world.query::<&Player>();
        match query.iter().next() {
            Some((_e, player)) => player.y,
            None => return, // No player in world
        }
    };
    let hitbox = viewport.player_box(config, player_y);

    let collided = world
        .query::<&Obstacle>()
        .iter()
        .any(|(_e, obstacle)| obstacle.collision_shape(viewport, config).intersects(&hitbox));

    if collided {
        events.collided = true;
    }
}
