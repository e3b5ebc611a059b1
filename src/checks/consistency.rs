//! Soft consistency warnings.
//!
//! Advisory checks the planner may override:
//! - all exams of one subject on one day prepare in the same room,
//! - exams sharing a block tag run back-to-back in one room.
//!
//! Only the first warning is reported; the prep-room rule is checked first.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Exam, ExamStatus};
use crate::time::EXAM_SLOTS;

/// Kind of soft warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsistencyWarning {
    /// Another exam of the same subject that day uses a different prep room.
    PrepRoomMismatch {
        /// Subject display name.
        subject: String,
        /// The prep room the other exam uses.
        other_prep_room_id: String,
    },
    /// Block members sit in different exam rooms.
    BlockRoomsDiffer,
    /// Block members leave a gap or overlap.
    BlockNotContiguous,
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrepRoomMismatch { subject, .. } => write!(
                f,
                "Fachkonsistenz: {subject} nutzt an diesem Tag bereits einen anderen Vorbereitungsraum."
            ),
            Self::BlockRoomsDiffer => {
                f.write_str("Prüfungsblock findet in unterschiedlichen Räumen statt.")
            }
            Self::BlockNotContiguous => f.write_str("Prüfungsblock ist nicht zusammenhängend."),
        }
    }
}

/// Runs the soft checks for one exam.
///
/// Backlog exams are never checked. Cancelled exams are ignored as
/// candidates.
pub fn check_consistency(exam: &Exam, others: &[Exam]) -> Option<ConsistencyWarning> {
    let day = exam.day()?;

    let same_day: Vec<&Exam> = others
        .iter()
        .filter(|o| o.id != exam.id && o.status != ExamStatus::Cancelled && o.day() == Some(day))
        .collect();

    if let Some(prep) = exam.prep_room_id.as_deref() {
        let mismatch = same_day.iter().find_map(|o| {
            o.prep_room_id
                .as_deref()
                .filter(|p| o.subject == exam.subject && *p != prep)
        });
        if let Some(other_prep) = mismatch {
            return Some(ConsistencyWarning::PrepRoomMismatch {
                subject: exam.subject.clone(),
                other_prep_room_id: other_prep.to_string(),
            });
        }
    }

    if let Some(group) = exam.group_id.as_deref() {
        let mut block: Vec<&Exam> = same_day
            .into_iter()
            .filter(|o| o.group_id.as_deref() == Some(group))
            .collect();
        block.push(exam);

        if block.len() > 1 {
            return check_block(&mut block);
        }
    }

    None
}

/// Checks room uniformity and exact contiguity of a block (len > 1).
fn check_block(block: &mut [&Exam]) -> Option<ConsistencyWarning> {
    let room = &block[0].room_id;
    if block.iter().any(|e| &e.room_id != room) {
        return Some(ConsistencyWarning::BlockRoomsDiffer);
    }

    block.sort_by_key(|e| e.start_time);
    let contiguous = block
        .windows(2)
        .all(|pair| pair[1].start_time == pair[0].start_time + EXAM_SLOTS);
    if !contiguous {
        return Some(ConsistencyWarning::BlockNotContiguous);
    }

    None
}
