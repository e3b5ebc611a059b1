//! Live phase of an exam on exam day.
//!
//! The live monitor polls once per second and asks where each student
//! currently is. The phase is a pure function of the clock, the exam's
//! boundary times and the check-in flag; nothing is stored between ticks.
//!
//! # Priority
//! Conditions are tested latest boundary first, so a moment that satisfies
//! several (`now >= exam_start` also satisfies `now >= taxi2_start`) maps
//! to the later phase:
//!
//! | Condition | Phase | Label | Blinks |
//! |-----------|-------|-------|--------|
//! | `now >= exam_start` | `InExam` | IN PRÜFUNG | no |
//! | `now >= taxi2_start` | `TaxiToExam` | ZUR PRÜFUNG | yes |
//! | `now >= prep_start` | `InPrep` | IN VORBEREITUNG | no |
//! | `now >= taxi1_start` | `TaxiToPrep` | ZUR VORBEREITUNG | yes |
//! | absent, `now >= check_in_deadline` | `CheckInWarning` | FEHLT | no |
//! | otherwise | `Waiting` | WARTET / empty | no |

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::LiveConfig;
use crate::time::ExamTimes;

/// Where a student is in the exam sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LivePhase {
    /// Before the sequence starts.
    Waiting,
    /// Check-in deadline passed without check-in.
    CheckInWarning,
    /// On the way to the prep room.
    TaxiToPrep,
    /// Preparing.
    InPrep,
    /// On the way to the exam room.
    TaxiToExam,
    /// Being examined.
    InExam,
}

/// Display state for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiveStatus {
    /// Current phase.
    pub phase: LivePhase,
    /// Badge text.
    pub label: &'static str,
    /// Whether the badge blinks (student must move now).
    pub blinking: bool,
    /// Next boundary the countdown runs towards; `None` once in the exam.
    pub next_boundary: Option<NaiveDateTime>,
}

impl LiveStatus {
    /// Derives the status at `now`.
    pub fn derive(now: NaiveDateTime, times: &ExamTimes, is_present: bool) -> Self {
        let (phase, label, blinking, next_boundary) = if now >= times.exam_start {
            (LivePhase::InExam, "IN PRÜFUNG", false, None)
        } else if now >= times.taxi2_start {
            (LivePhase::TaxiToExam, "ZUR PRÜFUNG", true, Some(times.exam_start))
        } else if now >= times.prep_start {
            (LivePhase::InPrep, "IN VORBEREITUNG", false, Some(times.taxi2_start))
        } else if now >= times.taxi1_start {
            (LivePhase::TaxiToPrep, "ZUR VORBEREITUNG", true, Some(times.prep_start))
        } else if !is_present && now >= times.check_in_deadline {
            (LivePhase::CheckInWarning, "FEHLT", false, Some(times.taxi1_start))
        } else {
            let label = if is_present { "WARTET" } else { "" };
            (LivePhase::Waiting, label, false, Some(times.taxi1_start))
        };

        Self {
            phase,
            label,
            blinking,
            next_boundary,
        }
    }
}

/// Countdown text towards `target`.
///
/// Empty when the exam start is more than the horizon ahead or more than
/// the grace period behind. Otherwise `M:SS` in the last minute and
/// `N Min.` (rounded up) before that.
pub fn countdown(
    now: NaiveDateTime,
    target: NaiveDateTime,
    exam_start: NaiveDateTime,
    config: &LiveConfig,
) -> String {
    let to_start = (exam_start - now).num_seconds();
    if to_start > config.countdown_horizon_minutes * 60
        || to_start < -config.countdown_grace_minutes * 60
    {
        return String::new();
    }

    let remaining = (target - now).num_seconds().max(0);
    if remaining <= 60 {
        format!("{}:{:02}", remaining / 60, remaining % 60)
    } else {
        format!("{} Min.", (remaining + 59) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    // slot 12 → 10:00; prep 09:40, taxi1 09:38, taxi2 09:58, check-in 09:20
    fn times() -> ExamTimes {
        ExamTimes::compute(13, NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(), false)
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 4)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn phase(now: NaiveDateTime, present: bool) -> LivePhase {
        LiveStatus::derive(now, &times(), present).phase
    }

    #[test]
    fn test_exact_exam_start_is_in_exam() {
        let s = LiveStatus::derive(at(10, 0, 0), &times(), true);
        assert_eq!(s.phase, LivePhase::InExam);
        assert_eq!(s.label, "IN PRÜFUNG");
        assert!(!s.blinking);
        assert_eq!(s.next_boundary, None);
    }

    #[test]
    fn test_phase_sequence() {
        assert_eq!(phase(at(9, 0, 0), true), LivePhase::Waiting);
        assert_eq!(phase(at(9, 38, 0), true), LivePhase::TaxiToPrep);
        assert_eq!(phase(at(9, 39, 59), true), LivePhase::TaxiToPrep);
        assert_eq!(phase(at(9, 40, 0), true), LivePhase::InPrep);
        assert_eq!(phase(at(9, 58, 0), true), LivePhase::TaxiToExam);
        assert_eq!(phase(at(10, 20, 0), true), LivePhase::InExam);
    }

    #[test]
    fn test_blinking_only_while_moving() {
        assert!(LiveStatus::derive(at(9, 38, 30), &times(), true).blinking);
        assert!(LiveStatus::derive(at(9, 59, 0), &times(), true).blinking);
        assert!(!LiveStatus::derive(at(9, 45, 0), &times(), true).blinking);
    }

    #[test]
    fn test_missing_student() {
        let s = LiveStatus::derive(at(9, 20, 0), &times(), false);
        assert_eq!(s.phase, LivePhase::CheckInWarning);
        assert_eq!(s.label, "FEHLT");
        assert_eq!(s.next_boundary, Some(times().taxi1_start));

        // present students just wait
        assert_eq!(phase(at(9, 20, 0), true), LivePhase::Waiting);
        // the sequence overrides the warning
        assert_eq!(phase(at(9, 41, 0), false), LivePhase::InPrep);
    }

    #[test]
    fn test_waiting_labels() {
        assert_eq!(LiveStatus::derive(at(8, 0, 0), &times(), true).label, "WARTET");
        assert_eq!(LiveStatus::derive(at(8, 0, 0), &times(), false).label, "");
    }

    #[test]
    fn test_countdown_formats() {
        let cfg = LiveConfig::default();
        let t = times();
        // 45 s to exam start
        let now = t.exam_start - Duration::seconds(45);
        assert_eq!(countdown(now, t.exam_start, t.exam_start, &cfg), "0:45");
        // exactly one minute
        let now = t.exam_start - Duration::seconds(60);
        assert_eq!(countdown(now, t.exam_start, t.exam_start, &cfg), "1:00");
        // 61 s rounds up to 2 minutes
        let now = t.exam_start - Duration::seconds(61);
        assert_eq!(countdown(now, t.exam_start, t.exam_start, &cfg), "2 Min.");
        // target already passed
        let now = t.prep_start + Duration::seconds(5);
        assert_eq!(countdown(now, t.prep_start, t.exam_start, &cfg), "0:00");
    }

    #[test]
    fn test_countdown_window() {
        let cfg = LiveConfig::default();
        let t = times();
        let early = t.exam_start - Duration::minutes(61);
        assert_eq!(countdown(early, t.taxi1_start, t.exam_start, &cfg), "");
        let edge = t.exam_start - Duration::minutes(60);
        assert_eq!(countdown(edge, t.taxi1_start, t.exam_start, &cfg), "38 Min.");
        let late = t.exam_start + Duration::minutes(31);
        assert_eq!(countdown(late, t.exam_end, t.exam_start, &cfg), "");
        let underway = t.exam_start + Duration::minutes(10);
        assert_eq!(countdown(underway, t.exam_end, t.exam_start, &cfg), "20 Min.");
    }
}
