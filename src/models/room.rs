//! Room model.
//!
//! Rooms host exams, preparation, waiting students, or a supervision
//! station. Stations may need several supervisors at once; each concurrent
//! supervisor occupies one lane (`Supervision::sub_slot_idx`).

use serde::{Deserialize, Serialize};

/// A room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Room purpose.
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Concurrent supervisors a station needs.
    #[serde(default = "default_supervisors")]
    pub required_supervisors: u32,
    /// Whether supervisions can be booked on this room.
    #[serde(default)]
    pub is_supervision_station: bool,
}

fn default_supervisors() -> u32 {
    1
}

/// Room purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Exam room.
    Exam,
    /// Preparation room.
    Prep,
    /// Waiting room.
    Waiting,
    /// Supervision station (corridor, entrance, ...).
    Supervision,
}

impl Room {
    /// Creates a room.
    pub fn new(id: impl Into<String>, name: impl Into<String>, room_type: RoomType) -> Self {
        let room_type_is_station = room_type == RoomType::Supervision;
        Self {
            id: id.into(),
            name: name.into(),
            room_type,
            required_supervisors: 1,
            is_supervision_station: room_type_is_station,
        }
    }

    /// Creates an exam room.
    pub fn exam(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, RoomType::Exam)
    }

    /// Creates a preparation room.
    pub fn prep(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, RoomType::Prep)
    }

    /// Creates a supervision station.
    pub fn station(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, RoomType::Supervision)
    }

    /// Sets the number of concurrent supervisors.
    pub fn with_supervisors(mut self, count: u32) -> Self {
        self.required_supervisors = count;
        self
    }
}
