//! Host-side game driver
//!
//! Owns the `Session` and turns gestures, keys and frame ticks into session
//! calls, then reacts to the frame's events with audio, HUD and persistence.
//! All browser access goes through the collaborator traits so the wiring is
//! testable off-browser.

use game_core::{Config, Events, Session, Viewport};

use crate::audio::{AudioSink, Tone};
use crate::hud::{HudSink, Status};
use crate::input::{key_down_action, key_up_releases, GestureTracker, KeyAction};
use crate::storage::ScoreStore;

pub struct Frontend<A: AudioSink, S: ScoreStore, H: HudSink> {
    pub session: Session,
    tracker: GestureTracker,
    last_intent: i8,
    audio: A,
    store: S,
    hud: H,
}

impl<A: AudioSink, S: ScoreStore, H: HudSink> Frontend<A, S, H> {
    pub fn new(viewport: Viewport, seed: u64, mut audio: A, store: S, mut hud: H) -> Self {
        let best = store.load_best();
        let session = Session::new(Config::new(), viewport, best, seed);

        hud.set_score(0);
        hud.set_best(best);
        hud.set_tip_visible(true);

        // Autoplay policy may reject this until the first gesture
        audio.restart_music();

        Self {
            session,
            tracker: GestureTracker::new(),
            last_intent: 0,
            audio,
            store,
            hud,
        }
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    /// Touch start / mouse down
    pub fn gesture_start(&mut self, y: f32) {
        self.tracker.press(y);
        self.start();
    }

    /// Touch move / mouse move. `pressed` is false for a mouse move with no buttons held.
    pub fn gesture_move(&mut self, y: f32, pressed: bool) {
        if !pressed {
            return;
        }
        if let Some(dir) = self.tracker.drag_to(y) {
            self.steer(dir);
        }
    }

    /// Touch end / mouse up
    pub fn gesture_end(&mut self) {
        self.tracker.release();
        self.release();
    }

    pub fn key_down(&mut self, key: &str) {
        match key_down_action(key) {
            Some(KeyAction::Steer(dir)) => {
                self.start();
                self.steer(dir);
            }
            Some(KeyAction::Commit) => {
                if !self.session.is_active() {
                    self.reset();
                }
            }
            None => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if key_up_releases(key) {
            self.release();
        }
    }

    /// Full restart from Idle
    pub fn reset(&mut self) {
        if !self.session.reset() {
            return;
        }
        self.last_intent = 0;
        self.hud.set_score(0);
        self.hud.set_tip_visible(false);
        self.audio.restart_music();
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.session.resize(viewport);
    }

    /// One animation tick
    pub fn tick(&mut self, raw_dt: f32) -> Events {
        let events = self.session.frame(raw_dt).clone();

        for _ in 0..events.scored {
            self.audio.play_score_cue();
        }
        if events.scored > 0 {
            self.hud.set_score(self.session.current_score());
        }

        if let Some(summary) = events.run_ended {
            if summary.new_best {
                self.store.save_best(summary.best);
                tracing::info!(best = summary.best, "new best score");
            }
            self.last_intent = 0;
            self.hud.set_status(Status::GameOver);
            self.hud.set_best(summary.best);
            self.hud.set_score(0);
            self.hud.set_tip_visible(true);
            self.audio.pause_music();
        }

        events
    }

    fn start(&mut self) {
        self.session.begin_run();
        self.hud.set_tip_visible(false);
        self.audio.ensure_context();
    }

    fn steer(&mut self, dir: i8) {
        self.session.set_intent(dir);
        self.hud.set_status(Status::for_intent(dir));
        if dir != self.last_intent {
            if let Some(tone) = Tone::for_intent(dir) {
                self.audio.play_tone(tone);
            }
        }
        self.last_intent = dir;
    }

    fn release(&mut self) {
        self.session.set_intent(0);
        self.last_intent = 0;
        self.hud.set_status(Status::Stopped);
    }
}
