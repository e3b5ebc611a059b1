//! Planning snapshot.
//!
//! The persistence layer hands the engine one snapshot of all entity
//! lists. Every check reads from such a snapshot and never writes back.

use serde::{Deserialize, Serialize};

use super::{Exam, ExamStatus, Room, Subject, Supervision, Teacher};
use crate::error::PlanningError;

/// All entities of one planning session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningSnapshot {
    /// Exams, scheduled or not.
    pub exams: Vec<Exam>,
    /// Supervision bookings.
    pub supervisions: Vec<Supervision>,
    /// Staff.
    pub teachers: Vec<Teacher>,
    /// Rooms and stations.
    pub rooms: Vec<Room>,
    /// Subject catalog.
    pub subjects: Vec<Subject>,
}

impl PlanningSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a snapshot from its JSON export.
    pub fn from_json(json: &str) -> Result<Self, PlanningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds an exam.
    pub fn with_exam(mut self, exam: Exam) -> Self {
        self.exams.push(exam);
        self
    }

    /// Adds a supervision booking.
    pub fn with_supervision(mut self, supervision: Supervision) -> Self {
        self.supervisions.push(supervision);
        self
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Finds a teacher by id.
    pub fn teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    /// Finds a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Finds an exam by id.
    pub fn exam(&self, id: &str) -> Option<&Exam> {
        self.exams.iter().find(|e| e.id == id)
    }

    /// Non-cancelled exams placed on the given day.
    pub fn exams_on_day(&self, day: u32) -> Vec<&Exam> {
        self.exams
            .iter()
            .filter(|e| e.status != ExamStatus::Cancelled && e.day() == Some(day))
            .collect()
    }
}
