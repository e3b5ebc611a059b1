//! Teacher workload points.
//!
//! Every non-cancelled exam a teacher sits in counts one point regardless
//! of role; every supervision counts its length in hours. The two units
//! are mixed on purpose: a 30-minute exam plus preparation weighs about
//! as much as an hour of corridor duty.

use serde::Serialize;

use crate::models::{Exam, ExamStatus, Supervision, Teacher};

/// Workload of one teacher.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeacherWorkload {
    /// Teacher id.
    pub teacher_id: String,
    /// Short name for reports.
    pub label: String,
    /// Exams with any role.
    pub exam_count: usize,
    /// Supervision hours.
    pub supervision_hours: f64,
    /// `exam_count + supervision_hours`.
    pub points: f64,
}

/// Points of one teacher.
pub fn calculate_teacher_points(
    teacher_id: &str,
    exams: &[Exam],
    supervisions: &[Supervision],
) -> f64 {
    let (exam_count, hours) = tally(teacher_id, exams, supervisions);
    exam_count as f64 + hours
}

fn tally(teacher_id: &str, exams: &[Exam], supervisions: &[Supervision]) -> (usize, f64) {
    let exam_count = exams
        .iter()
        .filter(|e| e.status != ExamStatus::Cancelled && e.has_role(teacher_id))
        .count();
    let hours = supervisions
        .iter()
        .filter(|s| s.teacher_id == teacher_id)
        .map(Supervision::hours)
        .sum::<f64>();
    (exam_count, hours)
}

/// Workload of every teacher, highest points first (ties by label).
pub fn workload_table(
    teachers: &[Teacher],
    exams: &[Exam],
    supervisions: &[Supervision],
) -> Vec<TeacherWorkload> {
    let mut table: Vec<TeacherWorkload> = teachers
        .iter()
        .map(|t| {
            let (exam_count, supervision_hours) = tally(&t.id, exams, supervisions);
            TeacherWorkload {
                teacher_id: t.id.clone(),
                label: t.label().to_string(),
                exam_count,
                supervision_hours,
                points: exam_count as f64 + supervision_hours,
            }
        })
        .collect();

    table.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then_with(|| a.label.cmp(&b.label))
    });
    table
}

/// Teachers whose points exceed `factor × average`.
///
/// The average is taken over teachers with nonzero points only, so staff
/// not involved in the exams do not drag it down.
pub fn imbalance_outliers(table: &[TeacherWorkload], factor: f64) -> Vec<&TeacherWorkload> {
    let active: Vec<&TeacherWorkload> = table.iter().filter(|w| w.points > 0.0).collect();
    if active.is_empty() {
        return Vec::new();
    }
    let average = active.iter().map(|w| w.points).sum::<f64>() / active.len() as f64;
    active
        .into_iter()
        .filter(|w| w.points > factor * average)
        .collect()
}
