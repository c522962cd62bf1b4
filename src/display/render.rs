//! Frame formatting for the terminal display

use crate::countdown::{self, TimeLeft};
use super::model::Frame;
use super::phase::Phase;

const BAR_WIDTH: usize = 24;

/// Urgency label, the critical tier included. The phase machine stops at
/// Warning; the sub-five-minute escalation is styling only.
pub fn urgency_label(frame: &Frame) -> &'static str {
    match frame.phase {
        Phase::Waiting => "WAITING",
        Phase::Complete => "COMPLETE",
        Phase::Running => "RUNNING",
        Phase::Warning => {
            if countdown::is_critical(frame.left.total_ms) {
                "CRITICAL"
            } else {
                "WARNING"
            }
        }
    }
}

/// ASCII progress bar, filled left to right.
pub fn render_bar(percent: u8, width: usize) -> String {
    let filled = (percent as usize * width) / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}

fn clock(left: &TimeLeft) -> String {
    countdown::format_clock(left.hours, left.minutes, left.seconds)
}

/// One render line per tick.
pub fn render_frame(frame: &Frame) -> String {
    let title = if frame.title.is_empty() {
        "(제목 없음)"
    } else {
        frame.title.as_str()
    };

    if frame.phase == Phase::Complete {
        return format!("[{:<8}] {} | 00:00:00 | 타이머 종료", urgency_label(frame), title);
    }

    format!(
        "[{:<8}] {} | {} | [{}] {:>3}% | {}",
        urgency_label(frame),
        title,
        clock(&frame.left),
        render_bar(frame.percent, BAR_WIDTH),
        frame.percent,
        countdown::format_remaining(&frame.left),
    )
}

/// Line shown while no countdown is active or the store is unreachable.
pub fn waiting_line(message: &str) -> String {
    format!("[WAITING ] {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(total_ms: i64, percent: u8, phase: Phase) -> Frame {
        let left = if total_ms <= 0 {
            TimeLeft::complete()
        } else {
            TimeLeft {
                hours: (total_ms / 3_600_000) as u64,
                minutes: ((total_ms % 3_600_000) / 60_000) as u64,
                seconds: ((total_ms % 60_000) / 1000) as u64,
                total_ms,
                is_complete: false,
            }
        };
        Frame {
            title: "스프린트".to_string(),
            left,
            percent,
            phase,
        }
    }

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(render_bar(0, 10), "----------");
        assert_eq!(render_bar(50, 10), "#####-----");
        assert_eq!(render_bar(100, 10), "##########");
        // rounding down never overflows the width
        assert_eq!(render_bar(99, 10).len(), 10);
    }

    #[test]
    fn labels_follow_urgency_tiers() {
        assert_eq!(urgency_label(&frame(2 * 3_600_000, 10, Phase::Running)), "RUNNING");
        assert_eq!(urgency_label(&frame(30 * 60_000, 80, Phase::Warning)), "WARNING");
        assert_eq!(urgency_label(&frame(2 * 60_000, 95, Phase::Warning)), "CRITICAL");
        assert_eq!(urgency_label(&frame(0, 100, Phase::Complete)), "COMPLETE");
    }

    #[test]
    fn running_frame_carries_clock_and_caption() {
        let line = render_frame(&frame(90 * 60_000 + 5000, 42, Phase::Running));
        assert!(line.contains("01:30:05"));
        assert!(line.contains("42%"));
        assert!(line.contains("1시간 30분 남음"));
        assert!(line.contains("스프린트"));
    }

    #[test]
    fn complete_frame_announces_the_end() {
        let line = render_frame(&frame(0, 100, Phase::Complete));
        assert!(line.contains("COMPLETE"));
        assert!(line.contains("타이머 종료"));
    }

    #[test]
    fn empty_title_gets_a_placeholder() {
        let mut f = frame(60_000, 1, Phase::Warning);
        f.title.clear();
        assert!(render_frame(&f).contains("(제목 없음)"));
    }
}
