//! Display model
//!
//! Owns the accepted record, the progress anchor, and the current phase.
//! The controller feeds it poller records and tick instants; it hands back
//! render frames. No I/O.

use chrono::{DateTime, Utc};

use crate::countdown::{self, TimeLeft};
use crate::state::TimerRecord;
use super::phase::{transition, Phase, PhaseEvent};

/// Everything one render pass needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub title: String,
    pub left: TimeLeft,
    pub percent: u8,
    pub phase: Phase,
}

#[derive(Debug, Default)]
pub struct DisplayModel {
    phase: Phase,
    record: Option<TimerRecord>,
}

impl DisplayModel {
    pub fn new() -> Self {
        Self {
            phase: Phase::Waiting,
            record: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply a record accepted by the poller. Returns true when the local
    /// render tick should (re)start, false when it should stop.
    ///
    /// The record's `updated_at` becomes the progress-bar anchor, so any
    /// accepted write resets the bar - even one that only changed the
    /// title. See the note on [`TimerRecord`].
    pub fn on_record(&mut self, record: TimerRecord) -> bool {
        let event = PhaseEvent::from_record(&record);
        self.phase = transition(self.phase, event);

        if event == PhaseEvent::TimerSet {
            self.record = Some(record);
            true
        } else {
            self.record = None;
            false
        }
    }

    /// One render tick at `now`. Returns None while no countdown is shown.
    /// After the frame that completes the countdown, the phase is terminal
    /// and the caller should stop ticking until the next accepted record.
    pub fn on_tick(&mut self, now: DateTime<Utc>) -> Option<Frame> {
        let record = self.record.as_ref()?;
        let target = record.target_time?;

        let left = countdown::time_left(target, now);
        self.phase = transition(self.phase, PhaseEvent::Tick(left));
        let percent = countdown::progress(record.updated_at, target, now);

        Some(Frame {
            title: record.title.clone(),
            left,
            percent,
            phase: self.phase,
        })
    }
}
