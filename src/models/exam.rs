//! Exam model.
//!
//! An exam is the central schedulable unit: one student, one subject, a
//! commission of up to three teachers, an exam room and a preparation room,
//! placed on the slot grid by its packed start coordinate.
//!
//! References to students, teachers and rooms are plain ids. The engine
//! never owns or resolves them beyond equality comparisons.

use serde::{Deserialize, Serialize};

use crate::time::SlotCoordinate;

/// Lifecycle state of an exam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamStatus {
    /// Not placed on the grid yet.
    #[default]
    Backlog,
    /// Placed on the grid.
    Scheduled,
    /// Currently taking place.
    Running,
    /// Finished.
    Completed,
    /// Called off; kept for the record.
    Cancelled,
}

/// An oral exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    /// Unique exam identifier.
    pub id: String,
    /// Examined student.
    pub student_id: String,
    /// Examiner.
    #[serde(default)]
    pub teacher_id: Option<String>,
    /// Chair of the commission.
    #[serde(default)]
    pub chair_id: Option<String>,
    /// Protocol-taker.
    #[serde(default)]
    pub protocol_id: Option<String>,
    /// Exam room.
    #[serde(default)]
    pub room_id: Option<String>,
    /// Preparation room.
    #[serde(default)]
    pub prep_room_id: Option<String>,
    /// Block tag; exams of one block run back-to-back in one room.
    #[serde(default)]
    pub group_id: Option<String>,
    /// Subject display name (also the lookup key into the subject catalog).
    pub subject: String,
    /// Packed start coordinate `day * 1000 + slot + 1`, `0` = backlog.
    #[serde(default)]
    pub start_time: u32,
    /// Lifecycle state.
    #[serde(default)]
    pub status: ExamStatus,
    /// Student has checked in.
    #[serde(default)]
    pub is_present: bool,
    /// Backup exam, exempt from the one-regular-exam-per-day rule.
    #[serde(default)]
    pub is_backup_exam: bool,
    /// Granted accommodation (+5 minutes preparation).
    #[serde(default, rename = "hasNachteilsausgleich")]
    pub has_accommodation: bool,
}

impl Exam {
    /// Creates an unscheduled exam.
    pub fn new(
        id: impl Into<String>,
        student_id: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            student_id: student_id.into(),
            teacher_id: None,
            chair_id: None,
            protocol_id: None,
            room_id: None,
            prep_room_id: None,
            group_id: None,
            subject: subject.into(),
            start_time: 0,
            status: ExamStatus::Backlog,
            is_present: false,
            is_backup_exam: false,
            has_accommodation: false,
        }
    }

    /// Sets the examiner.
    pub fn with_examiner(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    /// Sets the chair.
    pub fn with_chair(mut self, teacher_id: impl Into<String>) -> Self {
        self.chair_id = Some(teacher_id.into());
        self
    }

    /// Sets the protocol-taker.
    pub fn with_protocol(mut self, teacher_id: impl Into<String>) -> Self {
        self.protocol_id = Some(teacher_id.into());
        self
    }

    /// Sets the exam room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }

    /// Sets the preparation room.
    pub fn with_prep_room(mut self, room_id: impl Into<String>) -> Self {
        self.prep_room_id = Some(room_id.into());
        self
    }

    /// Sets the block tag.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Places the exam on the grid and marks it scheduled.
    pub fn scheduled_at(mut self, coordinate: SlotCoordinate) -> Self {
        self.start_time = coordinate.to_packed();
        self.status = ExamStatus::Scheduled;
        self
    }

    /// Sets the lifecycle state.
    pub fn with_status(mut self, status: ExamStatus) -> Self {
        self.status = status;
        self
    }

    /// Marks this as a backup exam.
    pub fn as_backup(mut self) -> Self {
        self.is_backup_exam = true;
        self
    }

    /// Grants the accommodation.
    pub fn with_accommodation(mut self) -> Self {
        self.has_accommodation = true;
        self
    }

    /// Marks the student as checked in.
    pub fn present(mut self) -> Self {
        self.is_present = true;
        self
    }

    /// Flips the check-in flag (live monitor toggle).
    pub fn toggle_presence(&mut self) {
        self.is_present = !self.is_present;
    }

    /// Whether the exam has a grid position.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.start_time != 0
    }

    /// Decoded grid position, `None` while in the backlog.
    pub fn coordinate(&self) -> Option<SlotCoordinate> {
        SlotCoordinate::from_packed(self.start_time)
    }

    /// Day index, `None` while in the backlog.
    pub fn day(&self) -> Option<u32> {
        self.coordinate().map(|c| c.day)
    }

    /// Assigned teachers in examiner, chair, protocol order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        [&self.teacher_id, &self.chair_id, &self.protocol_id]
            .into_iter()
            .filter_map(|r| r.as_deref())
    }

    /// Whether a teacher holds any role in this exam.
    pub fn has_role(&self, teacher_id: &str) -> bool {
        self.roles().any(|t| t == teacher_id)
    }

    /// Whether chair or protocol-taker is still missing.
    pub fn missing_commission(&self) -> bool {
        self.chair_id.is_none() || self.protocol_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_builder() {
        let exam = Exam::new("E1", "S1", "Mathematik")
            .with_examiner("T1")
            .with_chair("T2")
            .with_room("R101")
            .scheduled_at(SlotCoordinate::new(1, 3));

        assert_eq!(exam.start_time, 1004);
        assert_eq!(exam.status, ExamStatus::Scheduled);
        assert_eq!(exam.day(), Some(1));
        assert!(exam.is_scheduled());
        assert!(exam.missing_commission());
        assert_eq!(exam.roles().collect::<Vec<_>>(), vec!["T1", "T2"]);
        assert!(exam.has_role("T2"));
        assert!(!exam.has_role("T3"));
    }

    #[test]
    fn test_backlog_exam() {
        let exam = Exam::new("E1", "S1", "Biologie");
        assert!(!exam.is_scheduled());
        assert_eq!(exam.coordinate(), None);
        assert_eq!(exam.roles().count(), 0);
    }

    #[test]
    fn test_toggle_presence() {
        let mut exam = Exam::new("E1", "S1", "Deutsch");
        exam.toggle_presence();
        assert!(exam.is_present);
        exam.toggle_presence();
        assert!(!exam.is_present);
    }

    #[test]
    fn test_exam_json_shape() {
        let json = r#"{
            "id": "E7",
            "studentId": "S3",
            "teacherId": "T1",
            "roomId": "R1",
            "subject": "Physik",
            "startTime": 2005,
            "status": "scheduled",
            "isBackupExam": true,
            "hasNachteilsausgleich": true
        }"#;
        let exam: Exam = serde_json::from_str(json).unwrap();
        assert_eq!(exam.coordinate(), Some(SlotCoordinate::new(2, 4)));
        assert_eq!(exam.status, ExamStatus::Scheduled);
        assert!(exam.is_backup_exam);
        assert!(exam.has_accommodation);
        assert!(exam.chair_id.is_none());
    }
}
