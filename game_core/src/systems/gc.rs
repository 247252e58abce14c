use hecs::World;

use crate::components::*;
use crate::Config;

/// Garbage collection: despawn obstacles that scrolled past the off-screen margin
pub fn prune_obstacles(world: &mut World, config: &Config) -> usize {
    let to_remove: Vec<_> = world
        .query::<&Obstacle>()
        .iter()
        .filter(|(_entity, obstacle)| obstacle.x <= config.prune_x)
        .map(|(entity, _)| entity)
        .collect();

    for entity in &to_remove {
        let _ = world.despawn(*entity);
    }

    to_remove.len()
}

/// Despawn every obstacle
pub fn clear_obstacles(world: &mut World) {
    let to_remove: Vec<_> = world
        .query::<&Obstacle>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_player, spawn_obstacle, ordered_obstacles};

    fn bar_at(x: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Bar,
            x,
            y: 300.0,
            w: 22.0,
            h: 120.0,
            glow: Glow::Amber,
            scored: true,
        }
    }

    #[test]
    fn test_prunes_only_past_threshold() {
        let mut world = World::new();
        let config = Config::new();
        spawn_obstacle(&mut world, bar_at(-250.0), 0);
        spawn_obstacle(&mut world, bar_at(-150.0), 1);
        spawn_obstacle(&mut world, bar_at(300.0), 2);
        spawn_obstacle(&mut world, bar_at(700.0), 3);

        let removed = prune_obstacles(&mut world, &config);

        assert_eq!(removed, 1);
        let remaining: Vec<f32> = ordered_obstacles(&world).iter().map(|o| o.x).collect();
        assert_eq!(remaining, vec![-150.0, 300.0, 700.0], "Spawn order preserved");
    }

    #[test]
    fn test_clear_keeps_player() {
        let mut world = World::new();
        let player = create_player(&mut world, 300.0);
        spawn_obstacle(&mut world, bar_at(100.0), 0);
        spawn_obstacle(&mut world, bar_at(200.0), 1);

        clear_obstacles(&mut world);

        assert!(ordered_obstacles(&world).is_empty());
        assert!(world.contains(player));
    }
}
