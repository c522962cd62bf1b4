//! Countdown phase machine

use crate::countdown::{self, TimeLeft};
use crate::state::TimerRecord;

/// What a display surface is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No active timer known (also the disconnected state).
    #[default]
    Waiting,
    /// Active timer, more than an hour out.
    Running,
    /// Active timer, less than an hour left.
    Warning,
    /// Target reached; terminal until the next accepted record.
    Complete,
}

/// Inputs that move the phase machine. `TimerSet`/`TimerCleared` arrive on
/// the polling clock, `Tick` on the local one-second render clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// An accepted record with an active timer and a valid target.
    TimerSet,
    /// An accepted record that is inactive or has no target.
    TimerCleared,
    /// One local render tick with the freshly computed remaining time.
    Tick(TimeLeft),
}

impl PhaseEvent {
    /// Classify an accepted record. A stale target on an inactive record
    /// still clears the display.
    pub fn from_record(record: &TimerRecord) -> Self {
        if record.has_countdown() {
            PhaseEvent::TimerSet
        } else {
            PhaseEvent::TimerCleared
        }
    }
}

/// The transition function. Total over (state, event); rendering reads the
/// result, never drives it.
pub fn transition(phase: Phase, event: PhaseEvent) -> Phase {
    match event {
        PhaseEvent::TimerSet => Phase::Running,
        PhaseEvent::TimerCleared => Phase::Waiting,
        PhaseEvent::Tick(left) => match phase {
            // no tick runs while waiting; tolerate a stray one
            Phase::Waiting => Phase::Waiting,
            Phase::Complete => Phase::Complete,
            Phase::Running | Phase::Warning => {
                if left.is_complete {
                    Phase::Complete
                } else if countdown::is_warning(left.total_ms) {
                    Phase::Warning
                } else {
                    Phase::Running
                }
            }
        },
    }
}
