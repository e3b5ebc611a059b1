//! Integrity validation of a planning snapshot.
//!
//! The checks in [`crate::checks`] tolerate dangling references and skip
//! them silently. This pass reports them instead, for import and repair
//! tooling. Detects:
//! - Duplicate IDs
//! - References to unknown teachers or rooms
//! - One teacher in several roles of the same exam
//! - Status and grid position disagreeing
//! - Unreadable supervision start times

use std::collections::HashSet;

use crate::models::{ExamStatus, PlanningSnapshot};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of one kind share the same ID.
    DuplicateId,
    /// A role or booking names a teacher that doesn't exist.
    UnknownTeacher,
    /// An exam or booking names a room that doesn't exist.
    UnknownRoom,
    /// A teacher holds more than one role in one exam.
    RoleConflict,
    /// Backlog exam with a grid position, or placed exam without one.
    StatusMismatch,
    /// Supervision start is not `HH:mm`.
    InvalidTime,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the snapshot, collecting every problem found.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(snapshot: &PlanningSnapshot) -> ValidationResult {
    let mut errors = Vec::new();

    let teacher_ids = collect_ids(
        "teacher",
        snapshot.teachers.iter().map(|t| t.id.as_str()),
        &mut errors,
    );
    let room_ids = collect_ids(
        "room",
        snapshot.rooms.iter().map(|r| r.id.as_str()),
        &mut errors,
    );
    collect_ids(
        "subject",
        snapshot.subjects.iter().map(|s| s.id.as_str()),
        &mut errors,
    );
    collect_ids(
        "exam",
        snapshot.exams.iter().map(|e| e.id.as_str()),
        &mut errors,
    );
    collect_ids(
        "supervision",
        snapshot.supervisions.iter().map(|s| s.id.as_str()),
        &mut errors,
    );

    for exam in &snapshot.exams {
        let mut seen = HashSet::new();
        for teacher in exam.roles() {
            if !teacher_ids.contains(teacher) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTeacher,
                    format!("Exam '{}' references unknown teacher '{teacher}'", exam.id),
                ));
            }
            if !seen.insert(teacher) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::RoleConflict,
                    format!("Teacher '{teacher}' holds several roles in exam '{}'", exam.id),
                ));
            }
        }

        for room in [&exam.room_id, &exam.prep_room_id].into_iter().flatten() {
            if !room_ids.contains(room.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRoom,
                    format!("Exam '{}' references unknown room '{room}'", exam.id),
                ));
            }
        }

        let mismatch = match exam.status {
            ExamStatus::Backlog => exam.is_scheduled(),
            ExamStatus::Scheduled | ExamStatus::Running | ExamStatus::Completed => {
                !exam.is_scheduled()
            }
            ExamStatus::Cancelled => false,
        };
        if mismatch {
            errors.push(ValidationError::new(
                ValidationErrorKind::StatusMismatch,
                format!(
                    "Exam '{}' is {:?} but has start coordinate {}",
                    exam.id, exam.status, exam.start_time
                ),
            ));
        }
    }

    for s in &snapshot.supervisions {
        if !teacher_ids.contains(s.teacher_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTeacher,
                format!(
                    "Supervision '{}' references unknown teacher '{}'",
                    s.id, s.teacher_id
                ),
            ));
        }
        if !room_ids.contains(s.station_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRoom,
                format!(
                    "Supervision '{}' references unknown station '{}'",
                    s.id, s.station_id
                ),
            ));
        }
        if let Err(err) = s.start_minute() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTime,
                format!("Supervision '{}': {err}", s.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Collects ids into a set, reporting duplicates.
fn collect_ids<'a>(
    entity: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut set = HashSet::new();
    for id in ids {
        if !set.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exam, Room, Supervision, Teacher};
    use crate::time::SlotCoordinate;

    fn sample_snapshot() -> PlanningSnapshot {
        PlanningSnapshot::new()
            .with_teacher(Teacher::new("T1", "EIN"))
            .with_teacher(Teacher::new("T2", "ZWE"))
            .with_room(Room::exam("R1", "A101"))
            .with_room(Room::prep("P1", "A102"))
            .with_room(Room::station("F1", "Flur"))
            .with_exam(
                Exam::new("E1", "S1", "Chemie")
                    .with_examiner("T1")
                    .with_protocol("T2")
                    .with_room("R1")
                    .with_prep_room("P1")
                    .scheduled_at(SlotCoordinate::new(0, 0)),
            )
            .with_exam(Exam::new("E2", "S2", "Chemie"))
            .with_supervision(Supervision::new("A1", "F1", "T2", 0, "11:00", 45))
    }

    fn kinds(snapshot: &PlanningSnapshot) -> Vec<ValidationErrorKind> {
        validate_snapshot(snapshot)
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_snapshot() {
        assert!(validate_snapshot(&sample_snapshot()).is_ok());
        assert!(validate_snapshot(&PlanningSnapshot::new()).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let snap = sample_snapshot().with_room(Room::exam("R1", "B201"));
        let errors = validate_snapshot(&snap).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_unknown_references() {
        let snap = sample_snapshot()
            .with_exam(Exam::new("E3", "S3", "Chemie").with_chair("T9").with_prep_room("P9"))
            .with_supervision(Supervision::new("A2", "F9", "T1", 0, "12:00", 30));
        let kinds = kinds(&snap);
        assert_eq!(
            kinds
                .iter()
                .filter(|k| **k == ValidationErrorKind::UnknownTeacher)
                .count(),
            1
        );
        assert_eq!(
            kinds
                .iter()
                .filter(|k| **k == ValidationErrorKind::UnknownRoom)
                .count(),
            2
        );
    }

    #[test]
    fn test_role_conflict() {
        let snap = sample_snapshot().with_exam(
            Exam::new("E3", "S3", "Chemie")
                .with_examiner("T1")
                .with_chair("T1"),
        );
        assert_eq!(kinds(&snap), vec![ValidationErrorKind::RoleConflict]);
    }

    #[test]
    fn test_status_mismatch() {
        let mut backlog_with_slot = Exam::new("E3", "S3", "Chemie");
        backlog_with_slot.start_time = 5;
        let placed_without_slot = Exam::new("E4", "S4", "Chemie").with_status(ExamStatus::Running);
        let cancelled = Exam::new("E5", "S5", "Chemie").with_status(ExamStatus::Cancelled);

        let snap = sample_snapshot()
            .with_exam(backlog_with_slot)
            .with_exam(placed_without_slot)
            .with_exam(cancelled);
        assert_eq!(
            kinds(&snap),
            vec![
                ValidationErrorKind::StatusMismatch,
                ValidationErrorKind::StatusMismatch
            ]
        );
    }

    #[test]
    fn test_bad_supervision_time() {
        let snap =
            sample_snapshot().with_supervision(Supervision::new("A2", "F1", "T1", 0, "9 Uhr", 30));
        assert_eq!(kinds(&snap), vec![ValidationErrorKind::InvalidTime]);
    }

    #[test]
    fn test_multiple_errors() {
        let snap = sample_snapshot()
            .with_teacher(Teacher::new("T1", "DUP"))
            .with_exam(Exam::new("E1", "S9", "Chemie"));
        let errors = validate_snapshot(&snap).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
