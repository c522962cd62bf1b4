//! Pure countdown math
//!
//! Everything in this module is stateless and total: derive remaining time,
//! progress percentage, and urgency level from timestamps passed in by the
//! caller. No clocks are read here, which keeps every function testable
//! with fixed inputs.

use chrono::{DateTime, Duration, Utc};

/// One hour in milliseconds - the warning threshold.
pub const WARNING_THRESHOLD_MS: i64 = 60 * 60 * 1000;
/// Five minutes in milliseconds - the critical threshold.
pub const CRITICAL_THRESHOLD_MS: i64 = 5 * 60 * 1000;

/// Remaining time decomposed for rendering, recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// Remaining milliseconds, clamped to zero once the target has passed.
    pub total_ms: i64,
    pub is_complete: bool,
}

impl TimeLeft {
    /// The zero value returned for any target at or before `now`.
    pub fn complete() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
            total_ms: 0,
            is_complete: true,
        }
    }
}

/// Compute the time remaining until `target` as seen at `now`.
///
/// Hours do not roll over into days, so a countdown two days out reads
/// `48:00:00`.
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    let diff = (target - now).num_milliseconds();

    if diff <= 0 {
        return TimeLeft::complete();
    }

    let hours = (diff / (1000 * 60 * 60)) as u64;
    let minutes = ((diff % (1000 * 60 * 60)) / (1000 * 60)) as u64;
    let seconds = ((diff % (1000 * 60)) / 1000) as u64;

    TimeLeft {
        hours,
        minutes,
        seconds,
        total_ms: diff,
        is_complete: false,
    }
}

/// Percentage of the `start..target` window elapsed at `now`, saturating
/// to 0 before the window and 100 at or after the target. A degenerate
/// window (`target <= start`) counts as fully elapsed.
pub fn progress(start: DateTime<Utc>, target: DateTime<Utc>, now: DateTime<Utc>) -> u8 {
    let total = (target - start).num_milliseconds();
    let elapsed = (now - start).num_milliseconds();

    if total <= 0 {
        return 100;
    }
    if elapsed <= 0 {
        return 0;
    }
    if elapsed >= total {
        return 100;
    }

    ((elapsed as f64 / total as f64) * 100.0).round() as u8
}

/// Less than an hour left (and not yet complete).
pub fn is_warning(total_ms: i64) -> bool {
    total_ms > 0 && total_ms < WARNING_THRESHOLD_MS
}

/// Less than five minutes left (and not yet complete).
pub fn is_critical(total_ms: i64) -> bool {
    total_ms > 0 && total_ms < CRITICAL_THRESHOLD_MS
}

/// Absolute target `minutes` from `now`. Zero or negative minutes yield a
/// target already in the past, i.e. an immediately complete countdown -
/// callers that consider that invalid must validate before calling.
pub fn target_from_minutes(minutes: i64, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::milliseconds(minutes * 60 * 1000)
}

/// Two-digit zero pad for clock segments.
pub fn pad(n: u64) -> String {
    format!("{:02}", n)
}

/// `HH:MM:SS` clock string.
pub fn format_clock(hours: u64, minutes: u64, seconds: u64) -> String {
    format!("{}:{}:{}", pad(hours), pad(minutes), pad(seconds))
}

/// Human-readable duration for preset labels, e.g. "45분", "2시간",
/// "1시간 30분". Display language follows the board UI (Korean).
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{}분", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{}시간", hours)
    } else {
        format!("{}시간 {}분", hours, mins)
    }
}

/// Remaining-time caption shown under the progress bar, coarsest two units.
pub fn format_remaining(left: &TimeLeft) -> String {
    if left.hours > 0 {
        format!("{}시간 {}분 남음", left.hours, left.minutes)
    } else if left.minutes > 0 {
        format!("{}분 {}초 남음", left.minutes, left.seconds)
    } else {
        format!("{}초 남음", left.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn time_left_decomposes_future_target() {
        // 1h 30m 45s out
        let left = time_left(at(3600 + 30 * 60 + 45), at(0));
        assert!(!left.is_complete);
        assert_eq!((left.hours, left.minutes, left.seconds), (1, 30, 45));
        assert_eq!(left.total_ms, (3600 + 30 * 60 + 45) * 1000);
    }

    #[test]
    fn time_left_matches_wall_clock_difference() {
        for secs in [1, 59, 61, 3599, 3601, 86_400, 200_000] {
            let left = time_left(at(secs), at(0));
            let recomposed = left.hours * 3600 + left.minutes * 60 + left.seconds;
            assert_eq!(recomposed as i64, secs, "decomposition for {}s", secs);
        }
    }

    #[test]
    fn time_left_has_no_day_rollover() {
        let left = time_left(at(48 * 3600), at(0));
        assert_eq!(left.hours, 48);
    }

    #[test]
    fn time_left_is_complete_at_or_past_target() {
        for secs in [0, -1, -86_400] {
            let left = time_left(at(secs), at(0));
            assert!(left.is_complete);
            assert_eq!((left.hours, left.minutes, left.seconds), (0, 0, 0));
            assert_eq!(left.total_ms, 0);
        }
    }

    #[test]
    fn progress_saturates_at_boundaries() {
        let (start, target) = (at(0), at(600));
        assert_eq!(progress(start, target, at(-50)), 0);
        assert_eq!(progress(start, target, at(0)), 0);
        assert_eq!(progress(start, target, at(600)), 100);
        assert_eq!(progress(start, target, at(9_999)), 100);
    }

    #[test]
    fn progress_is_monotone_in_now() {
        let (start, target) = (at(0), at(1000));
        let mut last = 0;
        for secs in -10..1010 {
            let p = progress(start, target, at(secs));
            assert!(p >= last, "progress regressed at {}s: {} < {}", secs, p, last);
            assert!(p <= 100);
            last = p;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn progress_rounds_midpoint() {
        assert_eq!(progress(at(0), at(200), at(100)), 50);
        assert_eq!(progress(at(0), at(1000), at(333)), 33);
    }

    #[test]
    fn degenerate_window_is_fully_elapsed() {
        assert_eq!(progress(at(100), at(100), at(0)), 100);
        assert_eq!(progress(at(100), at(50), at(200)), 100);
    }

    #[test]
    fn warning_and_critical_boundaries() {
        assert!(!is_warning(0));
        assert!(is_warning(1));
        assert!(is_warning(WARNING_THRESHOLD_MS - 1));
        assert!(!is_warning(WARNING_THRESHOLD_MS));

        assert!(!is_critical(0));
        assert!(is_critical(1));
        assert!(is_critical(CRITICAL_THRESHOLD_MS - 1));
        assert!(!is_critical(CRITICAL_THRESHOLD_MS));
        // five minutes left is warning but not critical
        assert!(is_warning(CRITICAL_THRESHOLD_MS));
    }

    #[test]
    fn target_from_minutes_offsets_now() {
        assert_eq!(target_from_minutes(90, at(0)), at(90 * 60));
        // non-positive minutes land in the past, by design
        assert!(time_left(target_from_minutes(0, at(0)), at(0)).is_complete);
        assert!(time_left(target_from_minutes(-5, at(0)), at(0)).is_complete);
    }

    #[test]
    fn duration_labels() {
        assert_eq!(format_duration(45), "45분");
        assert_eq!(format_duration(60), "1시간");
        assert_eq!(format_duration(90), "1시간 30분");
        assert_eq!(format_duration(120), "2시간");
    }

    #[test]
    fn clock_formatting_pads_segments() {
        assert_eq!(format_clock(1, 2, 3), "01:02:03");
        assert_eq!(format_clock(48, 0, 59), "48:00:59");
    }

    #[test]
    fn remaining_caption_uses_coarsest_units() {
        assert_eq!(format_remaining(&time_left(at(3700), at(0))), "1시간 1분 남음");
        assert_eq!(format_remaining(&time_left(at(125), at(0))), "2분 5초 남음");
        assert_eq!(format_remaining(&time_left(at(42), at(0))), "42초 남음");
    }
}
