use game_core::systems::{advance_obstacles, prune_obstacles};
use game_core::*;
use hecs::World;
use std::collections::HashMap;

const DT: f32 = 0.016;

fn new_session(seed: u64) -> Session {
    Session::new(Config::new(), Viewport::new(800.0, 600.0), 0, seed)
}

/// Step until a run ends, returning the summary and total passes seen
fn run_until_collision(session: &mut Session, max_frames: usize) -> Option<(RunSummary, u32)> {
    let mut passes = 0;
    for _ in 0..max_frames {
        let events = session.frame(DT).clone();
        passes += events.scored;
        if let Some(summary) = events.run_ended {
            return Some((summary, passes));
        }
    }
    None
}

#[test]
fn test_player_stays_in_lane() {
    let mut session = new_session(3);
    session.begin_run();
    let config = session.config.clone();

    for frame in 0..3000 {
        if frame % 40 == 0 {
            let dir = [-1, 0, 1][(frame / 40) % 3];
            session.set_intent(dir);
        }
        if frame == 1500 {
            session.resize(Viewport::new(400.0, 900.0));
        }
        session.frame(DT);
        if !session.is_active() {
            session.reset();
        }

        // Limits come from the viewport in effect for the frame
        let top = session.viewport.top_limit(&config);
        let bottom = session.viewport.bottom_limit(&config);
        let y = session.player().y;
        assert!(y >= top && y <= bottom, "frame {}: y={} not in [{}, {}]", frame, y, top, bottom);
    }
}

#[test]
fn test_hold_ascend_for_one_second() {
    let mut session = Session::new(Config::new(), Viewport::new(4000.0, 600.0), 0, 5);
    session.begin_run();
    session.set_intent(-1);
    let top = session.viewport.top_limit(&session.config);

    let mut last_y = session.player().y;
    let mut last_vy = 0.0;
    let mut clamped = false;
    let frames = (1.0 / DT).ceil() as usize;

    for _ in 0..frames {
        session.frame(DT);
        let p = session.player();
        assert!(p.y <= last_y, "Position never increases while ascending");
        assert!(p.vy >= -700.0 - 1e-3, "Velocity never overshoots the target");
        if p.y <= top {
            clamped = true;
        }
        if !clamped {
            assert!(p.vy <= last_vy, "Velocity ramps toward the target");
        }
        last_y = p.y;
        last_vy = p.vy;
    }

    assert!(clamped, "One second of ascent reaches the top limit");
    assert!((session.player().y - top).abs() < 1e-3);
}

#[test]
fn test_obstacle_scrolls_then_pruned() {
    let mut world = World::new();
    let config = Config::new();
    let viewport = Viewport::new(800.0, 600.0);
    let time = Time::new(0.033, 0.0);
    let entity = spawn_obstacle(
        &mut world,
        Obstacle {
            kind: ObstacleKind::Bar,
            x: viewport.spawn_x(&config),
            y: 300.0,
            w: 22.0,
            h: 120.0,
            glow: Glow::Violet,
            scored: false,
        },
        0,
    );

    let mut last_x = viewport.spawn_x(&config);
    for tick in 1..=78 {
        advance_obstacles(&mut world, &time, 400.0);
        let x = world.get::<&Obstacle>(entity).unwrap().x;
        assert!((last_x - x - 13.2).abs() < 1e-3, "tick {}", tick);
        last_x = x;
        assert_eq!(prune_obstacles(&mut world, &config), 0, "tick {}", tick);
    }

    advance_obstacles(&mut world, &time, 400.0);
    assert_eq!(prune_obstacles(&mut world, &config), 1);
    assert!(ordered_obstacles(&world).is_empty());
}

#[test]
fn test_collision_ends_run() {
    let mut session = new_session(11);
    session.begin_run();

    let (summary, passes) = run_until_collision(&mut session, 20_000).expect("a bar eventually hits");

    assert_eq!(session.state(), RunState::Idle);
    assert_eq!(session.obstacle_count(), 0);
    assert_eq!(session.current_score(), 0);
    assert_eq!(summary.score, passes, "Final score counts every pass");
    assert_eq!(summary.best, summary.score);
    assert_eq!(session.best_score(), summary.score);
}

#[test]
fn test_best_score_monotonic_across_resets() {
    let mut session = new_session(21);
    session.begin_run();
    let mut best = 0;

    for _ in 0..6 {
        let (summary, _) = run_until_collision(&mut session, 20_000).expect("run ends");
        assert_eq!(summary.best, best.max(summary.score));
        assert_eq!(summary.new_best, summary.score > best);
        assert!(summary.best >= best);
        best = summary.best;

        assert!(session.reset());
        assert_eq!(session.current_score(), 0);
        assert_eq!(session.obstacle_count(), 0);
        assert_eq!(session.player().vy, 0.0);
    }
}

#[test]
fn test_stored_best_not_lowered() {
    let mut session = Session::new(Config::new(), Viewport::new(800.0, 600.0), 500, 4);
    session.begin_run();

    let (summary, _) = run_until_collision(&mut session, 20_000).expect("run ends");

    assert!(summary.score < 500);
    assert!(!summary.new_best);
    assert_eq!(session.best_score(), 500);
}

#[test]
fn test_scored_flag_flips_once_after_passing() {
    let mut session = new_session(8);
    session.begin_run();
    // Park the player at the top so some obstacles get through
    session.set_intent(-1);
    let player_x = session.viewport.player_x(&session.config);
    let mut seen: HashMap<SpawnSeq, bool> = HashMap::new();

    for _ in 0..4000 {
        session.frame(DT);
        if !session.is_active() {
            seen.clear();
            session.reset();
            session.set_intent(-1);
            continue;
        }
        for (_e, (ob, seq)) in session.world.query::<(&Obstacle, &SpawnSeq)>().iter() {
            if ob.scored {
                assert!(ob.trailing_edge() < player_x);
            }
            let was = seen.insert(*seq, ob.scored).unwrap_or(false);
            assert!(!(was && !ob.scored), "scored never reverts");
        }
    }
}

#[test]
fn test_reset_is_idempotent_from_idle() {
    let mut session = new_session(2);
    session.begin_run();
    run_until_collision(&mut session, 20_000).expect("run ends");

    for _ in 0..3 {
        assert_eq!(session.state(), RunState::Idle);
        assert!(session.reset());
        assert_eq!(session.current_score(), 0);
        assert_eq!(session.obstacle_count(), 0);
        assert_eq!(session.player().vy, 0.0);
        assert_eq!(session.intent(), 0);
        run_until_collision(&mut session, 20_000).expect("run ends");
    }
}

#[test]
fn test_same_seed_same_run() {
    let mut a = new_session(77);
    let mut b = new_session(77);
    a.begin_run();
    b.begin_run();

    let (ra, _) = run_until_collision(&mut a, 20_000).expect("run ends");
    let (rb, _) = run_until_collision(&mut b, 20_000).expect("run ends");

    assert_eq!(ra, rb);
    assert_eq!(a.time.now, b.time.now);
}

#[test]
fn test_world_speed_rises_with_time() {
    let mut session = Session::new(Config::new(), Viewport::new(800.0, 600.0), 0, 9);
    session.begin_run();
    session.frame(DT);
    let early = session.difficulty.world_speed;

    // Skip the clock ahead without simulating
    session.time.now = 30.0;
    session.frame(DT);
    let later = session.difficulty.world_speed;

    assert!(later > early);
    assert!(session.difficulty.gap_min >= 0.5);
    assert!(session.difficulty.gap_max >= 0.8);
}
