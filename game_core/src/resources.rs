use crate::Config;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Seconds elapsed since the last reset
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Score tracking for the current run and the process lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub current: u32,
    pub best: u32, // Never decreases
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a best score loaded from storage
    pub fn with_best(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn increment(&mut self) {
        self.current += 1;
    }

    /// Close the run: fold the current score into the best and zero it
    pub fn settle(&mut self) -> RunSummary {
        let score = self.current;
        let new_best = score > self.best;
        self.best = self.best.max(score);
        self.current = 0;
        RunSummary {
            score,
            best: self.best,
            new_best,
        }
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub best: u32,
    pub new_best: bool,
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub spawned: u32,
    pub scored: u32,
    pub collided: bool,
    pub run_ended: Option<RunSummary>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.spawned = 0;
        self.scored = 0;
        self.collided = false;
        self.run_ended = None;
    }
}

/// Latest-wins intent slot between input handlers and the frame tick
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentSlot {
    pending: Option<i8>,
}

impl IntentSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite any unread intent. Values are clamped to {-1, 0, 1}.
    pub fn push(&mut self, dir: i8) {
        self.pending = Some(dir.signum());
    }

    pub fn take(&mut self) -> Option<i8> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Spawn bookkeeping: seconds accumulated toward the next obstacle and the
/// sequence number the next one will carry
#[derive(Debug, Clone, Copy, Default)]
pub struct Spawner {
    pub timer: f32,
    pub next_seq: u64,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    pub fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

/// Speed and spawn-gap bounds derived from elapsed time and score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub tier: u32,
    pub world_speed: f32,
    pub gap_min: f32,
    pub gap_max: f32,
}

impl Difficulty {
    pub fn compute(elapsed: f32, score: u32, config: &Config) -> Self {
        let tier = 1 + score / config.tier_score_step;
        let tier_f = tier as f32;
        let elapsed = elapsed.max(0.0);

        let world_speed = config.base_speed
            + (elapsed * config.time_speed_rate).min(config.time_speed_cap)
            + tier_f * config.tier_speed_bonus;
        let gap_min = (config.gap_min_base
            - elapsed * config.gap_min_time_rate
            - tier_f * config.gap_tier_rate)
            .max(config.gap_min_floor);
        let gap_max = (config.gap_max_base
            - elapsed * config.gap_max_time_rate
            - tier_f * config.gap_tier_rate)
            .max(config.gap_max_floor);

        Self {
            tier,
            world_speed,
            gap_min,
            gap_max,
        }
    }

    /// Difficulty at the start of a run
    pub fn initial(config: &Config) -> Self {
        Self::compute(0.0, 0, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_updates_best_only_when_beaten() {
        let mut score = Score::with_best(5);
        for _ in 0..3 {
            score.increment();
        }
        let summary = score.settle();
        assert_eq!(summary, RunSummary { score: 3, best: 5, new_best: false });
        assert_eq!(score.current, 0);

        for _ in 0..7 {
            score.increment();
        }
        let summary = score.settle();
        assert_eq!(summary, RunSummary { score: 7, best: 7, new_best: true });
        assert_eq!(score.best, 7);
    }

    #[test]
    fn test_settle_tie_is_not_new_best() {
        let mut score = Score::with_best(4);
        for _ in 0..4 {
            score.increment();
        }
        let summary = score.settle();
        assert!(!summary.new_best);
        assert_eq!(summary.best, 4);
    }

    #[test]
    fn test_intent_slot_latest_wins() {
        let mut slot = IntentSlot::new();
        slot.push(-1);
        slot.push(1);
        assert_eq!(slot.take(), Some(1));
        assert_eq!(slot.take(), None, "Slot drains after one read");
    }

    #[test]
    fn test_intent_slot_clamps() {
        let mut slot = IntentSlot::new();
        slot.push(-7);
        assert_eq!(slot.take(), Some(-1));
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.spawned = 2;
        events.scored = 1;
        events.collided = true;
        events.run_ended = Some(RunSummary { score: 1, best: 1, new_best: true });

        events.clear();

        assert_eq!(events.spawned, 0);
        assert_eq!(events.scored, 0);
        assert!(!events.collided);
        assert!(events.run_ended.is_none());
    }

    #[test]
    fn test_difficulty_initial_values() {
        let config = Config::new();
        let d = Difficulty::initial(&config);
        assert_eq!(d.tier, 1);
        assert_eq!(d.world_speed, 450.0);
        assert!((d.gap_min - 0.85).abs() < 1e-5);
        assert!((d.gap_max - 1.45).abs() < 1e-5);
    }

    #[test]
    fn test_difficulty_tier_steps_every_ten_points() {
        let config = Config::new();
        assert_eq!(Difficulty::compute(0.0, 9, &config).tier, 1);
        assert_eq!(Difficulty::compute(0.0, 10, &config).tier, 2);
        assert_eq!(Difficulty::compute(0.0, 25, &config).tier, 3);
    }

    #[test]
    fn test_difficulty_time_component_saturates() {
        let config = Config::new();
        let a = Difficulty::compute(40.0, 0, &config);
        let b = Difficulty::compute(4000.0, 0, &config);
        assert_eq!(a.world_speed, 850.0);
        assert_eq!(b.world_speed, 850.0);
    }

    #[test]
    fn test_difficulty_speed_non_decreasing() {
        let config = Config::new();
        let mut last = 0.0;
        for step in 0..200 {
            let t = step as f32 * 0.5;
            let d = Difficulty::compute(t, step / 3, &config);
            assert!(d.world_speed >= last);
            last = d.world_speed;
        }
    }

    #[test]
    fn test_gap_bounds_respect_floors() {
        let config = Config::new();
        for (t, score) in [(0.0, 0), (30.0, 40), (600.0, 500), (1e6, 100_000)] {
            let d = Difficulty::compute(t, score, &config);
            assert!(d.gap_min >= 0.5, "gap_min {} at t={}", d.gap_min, t);
            assert!(d.gap_max >= 0.8, "gap_max {} at t={}", d.gap_max, t);
            assert!(d.gap_min <= d.gap_max);
        }
    }
}
