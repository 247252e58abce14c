use crate::{Config, Events, Obstacle, Score, Viewport};
use hecs::World;

/// Credit every obstacle whose trailing edge has passed the player column
pub fn check_scoring(
    world: &mut World,
    viewport: &Viewport,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    let player_x = viewport.player_x(config);

    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        if obstacle.trailing_edge() < player_x && obstacle.mark_scored() {
            score.increment();
            events.scored += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_obstacle, Glow, ObstacleKind};

    fn setup_world() -> (World, Config, Viewport, Score, Events) {
        (
            World::new(),
            Config::new(),
            Viewport::new(1000.0, 600.0), // Player column at x = 380
            Score::new(),
            Events::new(),
        )
    }

    fn bar_at(x: f32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Bar,
            x,
            y: 300.0,
            w: 22.0,
            h: 120.0,
            glow: Glow::Violet,
            scored: false,
        }
    }

    #[test]
    fn test_scores_when_trailing_edge_passes() {
        let (mut world, config, viewport, mut score, mut events) = setup_world();
        let entity = spawn_obstacle(&mut world, bar_at(357.0), 0); // trailing edge 379

        check_scoring(&mut world, &viewport, &config, &mut score, &mut events);

        assert_eq!(score.current, 1);
        assert_eq!(events.scored, 1);
        assert!(world.get::<&Obstacle>(entity).unwrap().scored);
    }

    #[test]
    fn test_no_score_while_overlapping_column() {
        let (mut world, config, viewport, mut score, mut events) = setup_world();
        spawn_obstacle(&mut world, bar_at(358.0), 0); // trailing edge exactly 380

        check_scoring(&mut world, &viewport, &config, &mut score, &mut events);

        assert_eq!(score.current, 0, "Strictly behind the player only");
        assert_eq!(events.scored, 0);
    }

    #[test]
    fn test_each_obstacle_scores_once() {
        let (mut world, config, viewport, mut score, mut events) = setup_world();
        spawn_obstacle(&mut world, bar_at(100.0), 0);

        for _ in 0..5 {
            check_scoring(&mut world, &viewport, &config, &mut score, &mut events);
        }

        assert_eq!(score.current, 1);
        assert_eq!(events.scored, 1);
    }

    #[test]
    fn test_multiple_passes_accumulate() {
        let (mut world, config, viewport, mut score, mut events) = setup_world();
        spawn_obstacle(&mut world, bar_at(100.0), 0);
        spawn_obstacle(&mut world, bar_at(200.0), 1);
        spawn_obstacle(&mut world, bar_at(700.0), 2);

        check_scoring(&mut world, &viewport, &config, &mut score, &mut events);

        assert_eq!(score.current, 2);
        assert_eq!(events.scored, 2);
    }
}
