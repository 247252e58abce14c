//! Authoritative game state for one player, one lane.
//!
//! `Session` owns the entity world (player node and obstacles), score,
//! difficulty, spawn bookkeeping and the run state machine. Input handlers
//! only write through `set_intent` / `begin_run` / `reset`; the frame callback
//! calls `frame` once per animation tick.

use hecs::{Entity, World};

use crate::systems::{clear_obstacles, confine_player};
use crate::*;

pub struct Session {
    pub world: World,
    pub time: Time,
    pub viewport: Viewport,
    pub config: Config,
    pub score: Score,
    pub spawner: Spawner,
    pub difficulty: Difficulty,
    pub events: Events,
    pub intents: IntentSlot,
    pub rng: GameRng,
    fsm: RunFsm,
    player: Entity,
}

impl Session {
    /// Idle session with the player centered vertically
    pub fn new(config: Config, viewport: Viewport, best: u32, seed: u64) -> Self {
        let mut world = World::new();
        let player = create_player(&mut world, viewport.height * 0.5);
        let difficulty = Difficulty::initial(&config);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            viewport,
            config,
            score: Score::with_best(best),
            spawner: Spawner::new(),
            difficulty,
            events: Events::new(),
            intents: IntentSlot::new(),
            rng: GameRng::new(seed),
            fsm: RunFsm::new(),
            player,
        }
    }

    pub fn state(&self) -> RunState {
        self.fsm.state()
    }

    pub fn is_active(&self) -> bool {
        self.fsm.is_active()
    }

    /// Start gesture. Returns true if this moved the session from Idle to Active.
    pub fn begin_run(&mut self) -> bool {
        let result = self.fsm.transition(RunAction::Start);
        result.success && result.from_state == RunState::Idle
    }

    /// Full re-initialization from Idle: clears obstacles, score, velocity,
    /// held intent, spawn bookkeeping (timer and sequence numbers) and the
    /// elapsed-time origin, then starts a run.
    /// Ignored while a run is active.
    pub fn reset(&mut self) -> bool {
        if !self.fsm.can_transition(RunAction::Reset) {
            return false;
        }

        clear_obstacles(&mut self.world);
        self.score.current = 0;
        if let Ok(mut player) = self.world.get::<&mut Player>(self.player) {
            player.vy = 0.0;
        }
        if let Ok(mut intent) = self.world.get::<&mut PlayerIntent>(self.player) {
            intent.dir = 0;
        }
        self.intents.clear();
        self.spawner = Spawner::new();
        self.time = Time::new(0.0, 0.0);
        self.difficulty = Difficulty::initial(&self.config);
        self.events.clear();

        self.fsm.transition(RunAction::Reset).success
    }

    /// Latest-wins intent write from the input layer
    pub fn set_intent(&mut self, dir: i8) {
        self.intents.push(dir);
    }

    /// Viewport changed. The player is pulled into the new lane at once so the
    /// lane bound holds even while Idle.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        confine_player(&mut self.world, &self.viewport, &self.config);
    }

    /// Advance one animation tick of `raw_dt` seconds.
    ///
    /// The elapsed-time clock runs in every state; physics only while Active.
    pub fn frame(&mut self, raw_dt: f32) -> &Events {
        self.events.clear();

        let dt = raw_dt.clamp(0.0, self.config.max_dt);
        self.time.dt = dt;
        self.time.now += dt;

        if !self.fsm.is_active() {
            return &self.events;
        }

        self.difficulty = step(
            &mut self.world,
            &self.time,
            &self.viewport,
            &self.config,
            &mut self.score,
            &mut self.spawner,
            &mut self.events,
            &mut self.intents,
            &mut self.rng,
        );

        if self.events.collided {
            self.end_run();
        }

        &self.events
    }

    /// Active -> Idle after a collision
    fn end_run(&mut self) {
        let summary = self.score.settle();
        clear_obstacles(&mut self.world);
        self.fsm.transition(RunAction::Collide);
        tracing::info!(
            score = summary.score,
            best = summary.best,
            new_best = summary.new_best,
            "run ended"
        );
        self.events.run_ended = Some(summary);
    }

    pub fn player(&self) -> Player {
        self.world
            .get::<&Player>(self.player)
            .map(|player| *player)
            .unwrap_or_else(|_| Player::new(self.viewport.height * 0.5))
    }

    pub fn intent(&self) -> i8 {
        self.world
            .get::<&PlayerIntent>(self.player)
            .map(|intent| intent.dir)
            .unwrap_or(0)
    }

    pub fn obstacles(&self) -> Vec<Obstacle> {
        ordered_obstacles(&self.world)
    }

    pub fn obstacle_count(&self) -> usize {
        self.world.query::<&Obstacle>().iter().count()
    }

    pub fn current_score(&self) -> u32 {
        self.score.current
    }

    pub fn best_score(&self) -> u32 {
        self.score.best
    }
}
