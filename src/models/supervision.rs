//! Supervision duty model.
//!
//! A supervision books one teacher onto one lane of a supervision station
//! for a stretch of the exam day. Unlike exams, supervisions carry their
//! day and clock time separately (`day_idx` plus an `HH:mm` string).

use serde::{Deserialize, Serialize};

use super::MinuteWindow;
use crate::error::PlanningError;
use crate::time::time_to_min;

/// A teacher's supervision booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supervision {
    /// Unique booking identifier.
    pub id: String,
    /// Supervised station (a room flagged as supervision station).
    pub station_id: String,
    /// Supervising teacher.
    pub teacher_id: String,
    /// Exam day (0-based).
    pub day_idx: u32,
    /// Start as `HH:mm`.
    pub start_time: String,
    /// Length of the duty (minutes).
    pub duration_minutes: i32,
    /// Manual weight entered by the planner, shown next to the booking.
    #[serde(default)]
    pub points: Option<f64>,
    /// Lane within the station.
    #[serde(default)]
    pub sub_slot_idx: u32,
}

impl Supervision {
    /// Creates a booking on lane 0.
    pub fn new(
        id: impl Into<String>,
        station_id: impl Into<String>,
        teacher_id: impl Into<String>,
        day_idx: u32,
        start_time: impl Into<String>,
        duration_minutes: i32,
    ) -> Self {
        Self {
            id: id.into(),
            station_id: station_id.into(),
            teacher_id: teacher_id.into(),
            day_idx,
            start_time: start_time.into(),
            duration_minutes,
            points: None,
            sub_slot_idx: 0,
        }
    }

    /// Sets the manual weight.
    pub fn with_points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }

    /// Sets the station lane.
    pub fn with_lane(mut self, sub_slot_idx: u32) -> Self {
        self.sub_slot_idx = sub_slot_idx;
        self
    }

    /// Start in minutes since midnight.
    pub fn start_minute(&self) -> Result<i32, PlanningError> {
        time_to_min(&self.start_time)
    }

    /// Booked minutes of the day.
    pub fn window(&self) -> Result<MinuteWindow, PlanningError> {
        Ok(MinuteWindow::starting_at(
            self.start_minute()?,
            self.duration_minutes,
        ))
    }

    /// Duty length in hours.
    pub fn hours(&self) -> f64 {
        f64::from(self.duration_minutes) / 60.0
    }
}
