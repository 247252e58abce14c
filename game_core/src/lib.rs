pub mod components;
pub mod config;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod scene;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use scene::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one frame of the obstacle-run simulation.
///
/// Returns the difficulty used for the frame. Terminal handling (ending the
/// run on collision) is left to the caller, which owns the run state machine.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    viewport: &Viewport,
    config: &Config,
    score: &mut Score,
    spawner: &mut Spawner,
    events: &mut Events,
    intents: &mut IntentSlot,
    rng: &mut GameRng,
) -> Difficulty {
    // Clamp dt to prevent large jumps
    let time = Time::new(time.dt.clamp(0.0, config.max_dt), time.now);

    // 1. Ingest latest intent
    ingest_intent(world, intents);

    // 2. Vertical integration
    move_player(world, &time, viewport, config);

    // 3. Difficulty from elapsed time and the score before this frame's passes
    let difficulty = Difficulty::compute(time.now, score.current, config);

    // 4. Spawn policy
    spawn_obstacles(world, &time, viewport, config, &difficulty, spawner, events, rng);

    // 5. Advance and collide
    advance_obstacles(world, &time, difficulty.world_speed);
    check_collisions(world, viewport, config, events);

    // 6. Scoring
    check_scoring(world, viewport, config, score, events);

    // 7. Pruning
    prune_obstacles(world, config);

    difficulty
}

/// Helper to create the player entity
pub fn create_player(world: &mut World, y: f32) -> hecs::Entity {
    world.spawn((Player::new(y), PlayerIntent::new()))
}

/// Helper to add an obstacle with its spawn sequence number
pub fn spawn_obstacle(world: &mut World, obstacle: Obstacle, seq: u64) -> hecs::Entity {
    world.spawn((obstacle, SpawnSeq(seq)))
}

/// Active obstacles in spawn order (which is also left-to-right order)
pub fn ordered_obstacles(world: &World) -> Vec<Obstacle> {
    let mut obstacles: Vec<(SpawnSeq, Obstacle)> = world
        .query::<(&Obstacle, &SpawnSeq)>()
        .iter()
        .map(|(_e, (obstacle, seq))| (*seq, *obstacle))
        .collect();
    obstacles.sort_by_key(|(seq, _)| *seq);
    obstacles.into_iter().map(|(_, obstacle)| obstacle).collect()
}
