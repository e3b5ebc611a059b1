//! Slot coordinate codec and exam-day clock.
//!
//! Exams store their start as a packed integer `day * 1000 + slot + 1`,
//! where `slot` counts 10-minute steps from 08:00. `0` is reserved for
//! "not scheduled". This module converts between that coordinate, minutes
//! since midnight, `HH:mm` strings, and the wall-clock boundaries of the
//! preparation/exam sequence.
//!
//! # Exam Sequence
//!
//! ```text
//! check-in deadline   exam_start - 40
//! taxi to prep        exam_start - (prep + 2)
//! preparation         exam_start - prep
//! taxi to exam        exam_start - 2
//! exam                exam_start .. exam_start + 30
//! ```
//!
//! `prep` is 20 minutes, or 25 with a granted accommodation.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::PlanningError;
use crate::models::MinuteWindow;

/// First slot of a day, in minutes since midnight (08:00).
pub const DAY_START_MIN: i32 = 8 * 60;
/// Length of one grid slot (minutes).
pub const SLOT_MINUTES: i32 = 10;
/// Number of slots an exam occupies.
pub const EXAM_SLOTS: u32 = 3;
/// Exam length (minutes).
pub const EXAM_MINUTES: i32 = EXAM_SLOTS as i32 * SLOT_MINUTES;
/// Multiplier separating the day index from the slot index.
pub const DAY_STRIDE: u32 = 1000;
/// Regular preparation time (minutes).
pub const PREP_MINUTES: i32 = 20;
/// Extra preparation time with a granted accommodation (minutes).
pub const ACCOMMODATION_EXTRA_MINUTES: i32 = 5;
/// Walking time between waiting room, prep room and exam room (minutes).
pub const TAXI_MINUTES: i32 = 2;
/// How long before the exam a student must have checked in (minutes).
pub const CHECK_IN_LEAD_MINUTES: i32 = 40;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Decoded exam start: day index and slot within the day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotCoordinate {
    /// Exam day (0-based).
    pub day: u32,
    /// 10-minute slot offset from 08:00.
    pub slot: u32,
}

impl SlotCoordinate {
    /// Creates a coordinate.
    pub fn new(day: u32, slot: u32) -> Self {
        Self { day, slot }
    }

    /// Decodes a packed coordinate. Returns `None` for `0` (backlog).
    pub fn from_packed(packed: u32) -> Option<Self> {
        if packed == 0 {
            return None;
        }
        let raw = packed - 1;
        Some(Self {
            day: raw / DAY_STRIDE,
            slot: raw % DAY_STRIDE,
        })
    }

    /// Decodes a packed coordinate, rejecting the backlog value.
    pub fn try_from_packed(packed: u32) -> Result<Self, PlanningError> {
        Self::from_packed(packed).ok_or(PlanningError::InvalidCoordinate(packed))
    }

    /// Encodes back into `day * 1000 + slot + 1`.
    pub fn to_packed(self) -> u32 {
        self.day * DAY_STRIDE + self.slot + 1
    }

    /// Exam start in minutes since midnight.
    pub fn start_minute(self) -> i32 {
        DAY_START_MIN + self.slot as i32 * SLOT_MINUTES
    }

    /// The minutes occupied by the exam itself.
    pub fn exam_window(self) -> MinuteWindow {
        MinuteWindow::starting_at(self.start_minute(), EXAM_MINUTES)
    }
}

/// Exam start (minutes since midnight) for a packed coordinate.
///
/// The coordinate must be nonzero; the day index is discarded.
pub fn exam_slot_to_min(coordinate: u32) -> i32 {
    let slot = coordinate.saturating_sub(1) % DAY_STRIDE;
    DAY_START_MIN + slot as i32 * SLOT_MINUTES
}

/// Formats minutes since midnight as zero-padded `HH:mm`.
///
/// Values outside one day wrap around midnight.
pub fn min_to_time(total_minutes: i32) -> String {
    let m = total_minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Parses `HH:mm` (or `H:mm`) into minutes since midnight.
pub fn time_to_min(value: &str) -> Result<i32, PlanningError> {
    let invalid = || PlanningError::InvalidTime(value.to_string());

    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Preparation time in minutes.
pub fn prep_duration(has_accommodation: bool) -> i32 {
    if has_accommodation {
        PREP_MINUTES + ACCOMMODATION_EXTRA_MINUTES
    } else {
        PREP_MINUTES
    }
}

/// Wall-clock boundaries of one exam, anchored to a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamTimes {
    /// Exam begins.
    pub exam_start: NaiveDateTime,
    /// Exam ends.
    pub exam_end: NaiveDateTime,
    /// Preparation begins.
    pub prep_start: NaiveDateTime,
    /// Student leaves the waiting room for the prep room.
    pub taxi1_start: NaiveDateTime,
    /// Student leaves the prep room for the exam room.
    pub taxi2_start: NaiveDateTime,
    /// Latest check-in.
    pub check_in_deadline: NaiveDateTime,
}

impl ExamTimes {
    /// Computes the boundaries for a packed coordinate on `reference_date`.
    ///
    /// Only the slot part of the coordinate is used; the caller picks the
    /// calendar day the exam day index corresponds to.
    pub fn compute(coordinate: u32, reference_date: NaiveDate, has_accommodation: bool) -> Self {
        let midnight = reference_date.and_time(NaiveTime::MIN);
        let start_min = exam_slot_to_min(coordinate);
        let prep = prep_duration(has_accommodation);

        let exam_start = midnight + Duration::minutes(i64::from(start_min));
        let before = |minutes: i32| exam_start - Duration::minutes(i64::from(minutes));

        Self {
            exam_start,
            exam_end: exam_start + Duration::minutes(i64::from(EXAM_MINUTES)),
            prep_start: before(prep),
            taxi1_start: before(prep + TAXI_MINUTES),
            taxi2_start: before(TAXI_MINUTES),
            check_in_deadline: before(CHECK_IN_LEAD_MINUTES),
        }
    }
}
