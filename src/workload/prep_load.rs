//! Preparation room load simulation.
//!
//! Before prep rooms are fixed per subject, planners try a mapping
//! subject → room and look at how many students would sit in each room at
//! the busiest moment of the day.
//!
//! # Algorithm
//! Each exam occupies its room from `exam_start - prep` until
//! `exam_start`. The day is cut into clock-aligned 10-minute cells; a
//! prep window counts once in every cell it touches. The peak is the
//! fullest cell, the earliest one on ties.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::{Exam, ExamStatus};
use crate::time::{min_to_time, prep_duration, SLOT_MINUTES};

/// Busiest moment of one prep room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrepLoad {
    /// Students preparing at the same time.
    pub peak: u32,
    /// Start of the peak cell, `HH:mm`.
    pub time: String,
}

/// Simulates prep room occupancy for a subject → room mapping.
///
/// Exams whose subject is not mapped, backlog exams and cancelled exams
/// are ignored. Rooms without any exam do not appear in the result.
pub fn calculate_prep_load(
    day_exams: &[Exam],
    subject_rooms: &HashMap<String, String>,
) -> BTreeMap<String, PrepLoad> {
    let mut cells: HashMap<&str, BTreeMap<i32, u32>> = HashMap::new();

    for exam in day_exams {
        if exam.status == ExamStatus::Cancelled {
            continue;
        }
        let (Some(room), Some(coord)) = (subject_rooms.get(&exam.subject), exam.coordinate())
        else {
            continue;
        };

        let exam_start = coord.start_minute();
        let prep_start = exam_start - prep_duration(exam.has_accommodation);
        let first_cell = prep_start.div_euclid(SLOT_MINUTES) * SLOT_MINUTES;

        let timeline = cells.entry(room.as_str()).or_default();
        for cell in (first_cell..exam_start).step_by(SLOT_MINUTES as usize) {
            *timeline.entry(cell).or_insert(0) += 1;
        }
    }

    cells
        .into_iter()
        .filter_map(|(room, timeline)| {
            let mut best: Option<(i32, u32)> = None;
            for (cell, count) in timeline {
                if best.map_or(true, |(_, peak)| count > peak) {
                    best = Some((cell, count));
                }
            }
            best.map(|(cell, peak)| {
                (
                    room.to_string(),
                    PrepLoad {
                        peak,
                        time: min_to_time(cell),
                    },
                )
            })
        })
        .collect()
}
