//! Run State Machine
//!
//! Two states: Idle (waiting for a start gesture) and Active (physics running).

/// Run states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Active,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    /// Touch, mouse or arrow key pressed
    Start,
    /// Commit key while idle
    Reset,
    /// Player hit an obstacle
    Collide,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: RunState,
    pub to_state: RunState,
    pub action: RunAction,
}

/// Run Finite State Machine
#[derive(Debug, Clone)]
pub struct RunFsm {
    state: RunState,
}

impl RunFsm {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn can_transition(&self, action: RunAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RunAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            tracing::debug!(?from_state, ?next_state, ?action, "run transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    fn get_next_state(&self, action: RunAction) -> Option<RunState> {
        match (self.state, action) {
            (RunState::Idle, RunAction::Start) => Some(RunState::Active),
            (RunState::Idle, RunAction::Reset) => Some(RunState::Active),

            // Repeated gestures while running keep the run going
            (RunState::Active, RunAction::Start) => Some(RunState::Active),
            (RunState::Active, RunAction::Collide) => Some(RunState::Idle),

            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == RunState::Active
    }
}

impl Default for RunFsm {
    fn default() -> Self {
        Self::new()
    }
}
