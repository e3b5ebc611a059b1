//! Teacher availability for supervision planning.
//!
//! A teacher is busy when a proposed duty overlaps
//! - any exam they sit in that day, widened by a buffer on both sides, or
//! - another supervision booked for them that day.
//!
//! Exam day indices and supervision `day_idx` are compared directly.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::PlanningConfig;
use crate::models::{
    find_subject_by_name, Exam, ExamStatus, MinuteWindow, Subject, Supervision, Teacher,
};
use crate::time::min_to_time;

/// A proposed supervision slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    /// Teacher to check.
    pub teacher_id: String,
    /// Exam day.
    pub day: u32,
    /// Proposed minutes of the day.
    pub window: MinuteWindow,
    /// Booking to leave out (the one being moved).
    pub ignore_id: Option<String>,
}

impl AvailabilityQuery {
    /// Creates a query for `duration_min` minutes starting at `start_min`.
    pub fn new(teacher_id: impl Into<String>, day: u32, start_min: i32, duration_min: i32) -> Self {
        Self {
            teacher_id: teacher_id.into(),
            day,
            window: MinuteWindow::starting_at(start_min, duration_min),
            ignore_id: None,
        }
    }

    /// Leaves an existing booking out of the check.
    pub fn ignoring(mut self, supervision_id: impl Into<String>) -> Self {
        self.ignore_id = Some(supervision_id.into());
        self
    }
}

/// Why a teacher cannot take the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusyReason {
    /// Within the buffer around one of their exams.
    ExamBuffer {
        /// The exam causing the block.
        exam_id: String,
    },
    /// Already booked for another supervision.
    Supervision {
        /// The conflicting booking.
        supervision_id: String,
        /// Its start, `HH:mm`.
        start_time: String,
    },
}

impl fmt::Display for BusyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExamBuffer { .. } => f.write_str("Überschneidung mit Prüfung (Pufferzeit)"),
            Self::Supervision { start_time, .. } => write!(f, "Bereits Aufsicht um {start_time}"),
        }
    }
}

/// Exam windows (plus buffer) a teacher sits in on a day, with exam ids.
fn blocked_exams<'a>(
    teacher_id: &'a str,
    day: u32,
    exams: &'a [Exam],
    buffer: i32,
) -> impl Iterator<Item = (&'a Exam, MinuteWindow)> + 'a {
    exams
        .iter()
        .filter(move |e| e.status != ExamStatus::Cancelled && e.has_role(teacher_id))
        .filter_map(move |e| {
            e.coordinate()
                .filter(|c| c.day == day)
                .map(|c| (e, c.exam_window().padded(buffer)))
        })
}

/// Periods a teacher must keep free on a day: each exam they sit in,
/// widened by the configured buffer.
pub fn teacher_blocked_periods(
    teacher_id: &str,
    day: u32,
    exams: &[Exam],
    config: &PlanningConfig,
) -> Vec<MinuteWindow> {
    blocked_exams(teacher_id, day, exams, config.availability.exam_buffer_minutes)
        .map(|(_, w)| w)
        .collect()
}

/// Exam windows on a day in subjects the teacher is qualified for.
///
/// Advisory: used to suggest substitute examiners, never to block.
/// Subjects resolve by display name; unknown names are skipped.
pub fn teacher_subject_periods(
    teacher: &Teacher,
    day: u32,
    exams: &[Exam],
    subjects: &[Subject],
) -> Vec<MinuteWindow> {
    exams
        .iter()
        .filter(|e| e.status != ExamStatus::Cancelled)
        .filter(|e| {
            find_subject_by_name(subjects, &e.subject).is_some_and(|s| teacher.teaches(&s.id))
        })
        .filter_map(|e| e.coordinate().filter(|c| c.day == day))
        .map(|c| c.exam_window())
        .collect()
}

/// Checks whether a teacher can take the proposed supervision slot.
///
/// Exam buffers are checked before other supervisions. Bookings with an
/// unreadable start time are skipped.
pub fn check_teacher_availability(
    query: &AvailabilityQuery,
    exams: &[Exam],
    supervisions: &[Supervision],
    config: &PlanningConfig,
) -> Option<BusyReason> {
    let buffer = config.availability.exam_buffer_minutes;
    if let Some((exam, _)) = blocked_exams(&query.teacher_id, query.day, exams, buffer)
        .find(|(_, w)| w.overlaps(&query.window))
    {
        return Some(BusyReason::ExamBuffer {
            exam_id: exam.id.clone(),
        });
    }

    for s in supervisions {
        if s.teacher_id != query.teacher_id
            || s.day_idx != query.day
            || query.ignore_id.as_deref() == Some(s.id.as_str())
        {
            continue;
        }
        let window = match s.window() {
            Ok(w) => w,
            Err(err) => {
                warn!(supervision = %s.id, %err, "skipping supervision with bad start time");
                continue;
            }
        };
        if window.overlaps(&query.window) {
            return Some(BusyReason::Supervision {
                supervision_id: s.id.clone(),
                start_time: min_to_time(window.start),
            });
        }
    }

    None
}
