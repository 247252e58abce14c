//! Gesture and keyboard input handling
//!
//! Pure state machine; the browser listeners in `web` feed it raw
//! coordinates and key names.

/// Vertical distance (CSS px) a drag must cover before it counts as a direction
pub const DRAG_THRESHOLD: f32 = 10.0;

/// Tracks the reference coordinate of the gesture in progress
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureTracker {
    reference_y: Option<f32>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, y: f32) {
        self.reference_y = Some(y);
    }

    pub fn release(&mut self) {
        self.reference_y = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.reference_y.is_some()
    }

    /// Intent for a move to `y`. `None` when no gesture is in progress.
    pub fn drag_to(&self, y: f32) -> Option<i8> {
        let reference = self.reference_y?;
        Some(intent_for_delta(y - reference))
    }
}

/// Map a vertical drag delta to an intent: up is negative
pub fn intent_for_delta(delta: f32) -> i8 {
    if delta < -DRAG_THRESHOLD {
        -1
    } else if delta > DRAG_THRESHOLD {
        1
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Hold a direction and start the run
    Steer(i8),
    /// Reset when idle
    Commit,
}

/// Handle key down event
pub fn key_down_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowUp" => Some(KeyAction::Steer(-1)),
        "ArrowDown" => Some(KeyAction::Steer(1)),
        " " | "Spacebar" => Some(KeyAction::Commit),
        _ => None,
    }
}

/// Handle key up event. True when the key released a held direction.
pub fn key_up_releases(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown")
}
