//! Hard collision detection.
//!
//! Decides whether an exam at its current grid position clashes with any
//! other exam. Rules, checked per candidate in this order:
//!
//! 1. Same student, same day, both regular (non-backup) exams.
//! 2. Time overlap of the fixed 3-slot exam windows, and then
//!    - same exam room,
//!    - same student (backup exams included),
//!    - a shared teacher in any commission role.
//!
//! The first hit is returned. Completed exams are ignored as candidates;
//! cancelled ones are still compared.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::models::{Exam, ExamStatus};
use crate::time::EXAM_SLOTS;

/// Kind of hard conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Student has two regular exams on one day.
    SameDayStudent,
    /// Exam room is double-booked.
    RoomOccupied,
    /// Student sits two overlapping exams.
    StudentOverlap,
    /// A teacher sits two overlapping exams.
    TeacherOverlap,
}

impl CollisionKind {
    /// User-facing text.
    pub fn message(self) -> &'static str {
        match self {
            Self::SameDayStudent => "Schüler hat mehrere reguläre Prüfungen am selben Tag.",
            Self::RoomOccupied => "Raumbelegung kollidiert.",
            Self::StudentOverlap => "Zeitliche Überschneidung für Schüler.",
            Self::TeacherOverlap => "Lehrer-Kollision.",
        }
    }
}

/// A detected conflict with another exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    /// What clashes.
    pub kind: CollisionKind,
    /// The exam it clashes with.
    pub other_exam_id: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.message())
    }
}

/// Checks one exam against all others.
///
/// Returns `None` for backlog exams and exams without a room. `others` may
/// contain `exam` itself; entries with the same id are skipped.
pub fn check_collision(exam: &Exam, others: &[Exam]) -> Option<Collision> {
    let coord = exam.coordinate()?;
    exam.room_id.as_ref()?;

    let roles: Vec<&str> = exam.roles().collect();

    for other in others {
        if other.id == exam.id || other.status == ExamStatus::Completed {
            continue;
        }
        let Some(other_coord) = other.coordinate() else {
            continue;
        };
        if other_coord.day != coord.day {
            continue;
        }

        let same_student = other.student_id == exam.student_id;
        let kind = if same_student && !exam.is_backup_exam && !other.is_backup_exam {
            Some(CollisionKind::SameDayStudent)
        } else if slots_overlap(coord.slot, other_coord.slot) {
            if other.room_id == exam.room_id {
                Some(CollisionKind::RoomOccupied)
            } else if same_student {
                Some(CollisionKind::StudentOverlap)
            } else if other.roles().any(|t| roles.contains(&t)) {
                Some(CollisionKind::TeacherOverlap)
            } else {
                None
            }
        } else {
            None
        };

        if let Some(kind) = kind {
            trace!(exam = %exam.id, other = %other.id, ?kind, "collision");
            return Some(Collision {
                kind,
                other_exam_id: other.id.clone(),
            });
        }
    }

    None
}

/// Whether two exams starting at these slots share any slot.
#[inline]
fn slots_overlap(a: u32, b: u32) -> bool {
    a < b + EXAM_SLOTS && a + EXAM_SLOTS > b
}
