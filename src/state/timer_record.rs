//! The singleton timer record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The store holds exactly one of these rows.
pub const TIMER_RECORD_ID: &str = "1";

/// Persisted timer state shared by every display surface.
///
/// `updated_at` is assigned by the store on every write and serves as the
/// change token the pollers compare. Displays also anchor their progress
/// bar to it, so a title-only edit resets the bar even though the deadline
/// did not move - a known limitation of the single-field convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerRecord {
    pub title: String,
    pub target_time: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
    pub id: String,
}

impl TimerRecord {
    /// Create the initial stopped record.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            target_time: None,
            is_active: false,
            updated_at: Utc::now(),
            id: TIMER_RECORD_ID.to_string(),
        }
    }

    /// Whether a display may render a countdown from this record: it must
    /// be active AND carry a target time.
    pub fn has_countdown(&self) -> bool {
        self.is_active && self.target_time.is_some()
    }
}

impl Default for TimerRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_record_is_stopped() {
        let record = TimerRecord::new();
        assert!(!record.is_active);
        assert!(record.target_time.is_none());
        assert!(!record.has_countdown());
        assert_eq!(record.id, TIMER_RECORD_ID);
    }

    #[test]
    fn stale_target_alone_is_not_a_countdown() {
        let mut record = TimerRecord::new();
        record.target_time = Some(Utc::now() + Duration::hours(1));
        assert!(!record.has_countdown());

        record.is_active = true;
        assert!(record.has_countdown());

        record.target_time = None;
        assert!(!record.has_countdown());
    }
}
