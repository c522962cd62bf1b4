//! Local input validation
//!
//! Every rule here runs before the store is contacted; a rejected input
//! never produces a write.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use crate::countdown;

/// Resolve start inputs into an absolute target. Exactly one of `at` /
/// `minutes` must be given; absolute targets must lie in the future,
/// durations must be positive.
pub fn resolve_target(
    at: Option<DateTime<Utc>>,
    minutes: Option<i64>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    match (at, minutes) {
        (Some(_), Some(_)) => bail!("Give either a target time or a duration, not both"),
        (None, None) => bail!("A target time (--at) or a duration (--minutes) is required"),
        (Some(target), None) => {
            if target <= now {
                bail!("Target time must be in the future");
            }
            Ok(target)
        }
        (None, Some(minutes)) => {
            if minutes <= 0 {
                bail!("Duration must be a positive number of minutes");
            }
            Ok(countdown::target_from_minutes(minutes, now))
        }
    }
}

/// Validate preset creation input, returning the trimmed title.
pub fn validate_preset(title: &str, minutes: u32) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        bail!("Preset title is required");
    }
    if minutes == 0 {
        bail!("Preset duration must be a positive number of minutes");
    }
    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn future_absolute_target_passes() {
        let target = now() + Duration::hours(2);
        assert_eq!(resolve_target(Some(target), None, now()).unwrap(), target);
    }

    #[test]
    fn past_or_present_target_is_rejected() {
        assert!(resolve_target(Some(now()), None, now()).is_err());
        assert!(resolve_target(Some(now() - Duration::seconds(1)), None, now()).is_err());
    }

    #[test]
    fn positive_duration_resolves_relative_to_now() {
        let target = resolve_target(None, Some(90), now()).unwrap();
        assert_eq!(target, now() + Duration::minutes(90));
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        assert!(resolve_target(None, Some(0), now()).is_err());
        assert!(resolve_target(None, Some(-30), now()).is_err());
    }

    #[test]
    fn ambiguous_or_missing_inputs_are_rejected() {
        assert!(resolve_target(None, None, now()).is_err());
        assert!(resolve_target(Some(now() + Duration::hours(1)), Some(10), now()).is_err());
    }

    #[test]
    fn preset_input_rules() {
        assert_eq!(validate_preset("  점심시간 ", 60).unwrap(), "점심시간");
        assert!(validate_preset("", 60).is_err());
        assert!(validate_preset("   ", 60).is_err());
        assert!(validate_preset("ok", 0).is_err());
    }
}
