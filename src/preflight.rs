//! Preflight review of one exam day.
//!
//! Runs every check over a day and condenses the findings into a short
//! list of issues for the review screen shown before plans are exported.
//! Counts are aggregated per category; individual exams are listed in
//! the issue detail.
//!
//! The review never fails. An empty list means nothing to report; a day
//! without exams yields exactly one informational issue.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::checks::{check_collision, check_consistency};
use crate::config::PlanningConfig;
use crate::models::{Exam, PlanningSnapshot};
use crate::workload::{imbalance_outliers, workload_table};

/// How serious an issue is. Orders `Error` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// Must be fixed before export.
    Error,
    /// Should be looked at.
    Warning,
    /// For the record.
    Info,
}

/// What an issue is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueCategory {
    /// The day's plan as a whole.
    Schedule,
    /// Commission staffing.
    Commission,
    /// Room assignment.
    Rooms,
    /// Hard collisions.
    Collisions,
    /// Soft consistency rules.
    Consistency,
    /// Teacher workload.
    Workload,
    /// Student exam load.
    Students,
}

/// One finding of the review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreflightIssue {
    /// Stable identifier, one per kind of finding.
    pub id: &'static str,
    /// Seriousness.
    pub severity: Severity,
    /// Topic.
    pub category: IssueCategory,
    /// Short summary.
    pub message: String,
    /// Affected exams or teachers.
    pub detail: Option<String>,
}

impl PreflightIssue {
    fn new(
        id: &'static str,
        severity: Severity,
        category: IssueCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            severity,
            category,
            message: message.into(),
            detail: None,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Reviews the non-cancelled exams placed on `day`.
///
/// Collisions are checked against every exam in the snapshot; workload is
/// measured over the whole snapshot. Issues come ordered by severity.
pub fn run_preflight(
    day: u32,
    snapshot: &PlanningSnapshot,
    config: &PlanningConfig,
) -> Vec<PreflightIssue> {
    let day_exams = snapshot.exams_on_day(day);
    if day_exams.is_empty() {
        return vec![PreflightIssue::new(
            "no-exams",
            Severity::Info,
            IssueCategory::Schedule,
            "Keine Prüfungen an diesem Tag geplant.",
        )];
    }

    let mut issues = Vec::new();

    let incomplete: Vec<&Exam> = day_exams
        .iter()
        .copied()
        .filter(|e| e.missing_commission())
        .collect();
    if !incomplete.is_empty() {
        issues.push(
            PreflightIssue::new(
                "missing-commission",
                Severity::Warning,
                IssueCategory::Commission,
                format!("{} Prüfung(en) ohne vollständige Kommission", incomplete.len()),
            )
            .with_detail(join_ids(&incomplete)),
        );
    }

    let without_prep: Vec<&Exam> = day_exams
        .iter()
        .copied()
        .filter(|e| e.prep_room_id.is_none())
        .collect();
    if !without_prep.is_empty() {
        issues.push(
            PreflightIssue::new(
                "missing-prep-room",
                Severity::Info,
                IssueCategory::Rooms,
                format!("{} Prüfung(en) ohne Vorbereitungsraum", without_prep.len()),
            )
            .with_detail(join_ids(&without_prep)),
        );
    }

    let collisions: Vec<String> = day_exams
        .iter()
        .filter_map(|e| check_collision(e, &snapshot.exams).map(|c| format!("{}: {c}", e.id)))
        .collect();
    if !collisions.is_empty() {
        issues.push(
            PreflightIssue::new(
                "collisions",
                Severity::Error,
                IssueCategory::Collisions,
                format!("{} Prüfung(en) mit Kollisionen", collisions.len()),
            )
            .with_detail(collisions.join("; ")),
        );
    }

    let warnings: Vec<String> = day_exams
        .iter()
        .filter_map(|e| check_consistency(e, &snapshot.exams).map(|w| format!("{}: {w}", e.id)))
        .collect();
    if !warnings.is_empty() {
        issues.push(
            PreflightIssue::new(
                "consistency",
                Severity::Warning,
                IssueCategory::Consistency,
                format!("{} Prüfung(en) mit Konsistenzwarnung", warnings.len()),
            )
            .with_detail(warnings.join("; ")),
        );
    }

    let table = workload_table(&snapshot.teachers, &snapshot.exams, &snapshot.supervisions);
    let outliers = imbalance_outliers(&table, config.preflight.imbalance_factor);
    if !outliers.is_empty() {
        let names: Vec<String> = outliers
            .iter()
            .map(|w| format!("{} ({:.1} Punkte)", w.label, w.points))
            .collect();
        issues.push(
            PreflightIssue::new(
                "workload-imbalance",
                Severity::Warning,
                IssueCategory::Workload,
                "Ungleiche Lehrerbelastung",
            )
            .with_detail(names.join(", ")),
        );
    }

    let mut per_student: HashMap<&str, usize> = HashMap::new();
    for e in &day_exams {
        *per_student.entry(e.student_id.as_str()).or_insert(0) += 1;
    }
    let mut repeated: Vec<&str> = per_student
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(s, _)| s)
        .collect();
    if !repeated.is_empty() {
        repeated.sort_unstable();
        issues.push(
            PreflightIssue::new(
                "student-multiple-exams",
                Severity::Info,
                IssueCategory::Students,
                format!("{} Schüler mit mehreren Prüfungen am Tag", repeated.len()),
            )
            .with_detail(repeated.join(", ")),
        );
    }

    issues.sort_by_key(|i| i.severity);
    debug!(day, exams = day_exams.len(), issues = issues.len(), "preflight finished");
    issues
}

fn join_ids(exams: &[&Exam]) -> String {
    exams
        .iter()
        .map(|e| e.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExamStatus, Supervision, Teacher};
    use crate::time::SlotCoordinate;

    fn full_exam(id: &str, student: &str, room: &str, slot: u32) -> Exam {
        Exam::new(id, student, "Biologie")
            .with_examiner("T1")
            .with_chair("T2")
            .with_protocol("T3")
            .with_room(room)
            .with_prep_room("P1")
            .scheduled_at(SlotCoordinate::new(0, slot))
    }

    fn staff() -> Vec<Teacher> {
        vec![
            Teacher::new("T1", "EIN"),
            Teacher::new("T2", "ZWE"),
            Teacher::new("T3", "DRE"),
        ]
    }

    fn ids(issues: &[PreflightIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_empty_day() {
        let mut snap = PlanningSnapshot::new()
            .with_exam(full_exam("A", "S1", "R1", 0).scheduled_at(SlotCoordinate::new(1, 0)))
            .with_exam(full_exam("B", "S2", "R1", 3).with_status(ExamStatus::Cancelled));
        snap.teachers = staff();

        let issues = run_preflight(0, &snap, &PlanningConfig::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].id, "no-exams");
        assert_eq!(issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_clean_day() {
        let mut snap = PlanningSnapshot::new()
            .with_exam(full_exam("A", "S1", "R1", 0))
            .with_exam(full_exam("B", "S2", "R1", 3));
        snap.teachers = staff();

        assert!(run_preflight(0, &snap, &PlanningConfig::default()).is_empty());
    }

    #[test]
    fn test_aggregated_counts_and_order() {
        let mut snap = PlanningSnapshot::new()
            .with_exam(full_exam("A", "S1", "R1", 0))
            .with_exam(full_exam("B", "S2", "R1", 1).with_protocol("T4"))
            .with_exam(
                Exam::new("C", "S3", "Biologie")
                    .with_examiner("T5")
                    .with_room("R2")
                    .scheduled_at(SlotCoordinate::new(0, 20)),
            )
            .with_exam(full_exam("D", "S1", "R3", 30).as_backup());
        snap.teachers = staff();

        let issues = run_preflight(0, &snap, &PlanningConfig::default());
        assert_eq!(
            ids(&issues),
            vec![
                "collisions",
                "missing-commission",
                "missing-prep-room",
                "student-multiple-exams",
            ]
        );

        let collisions = &issues[0];
        assert_eq!(collisions.severity, Severity::Error);
        assert_eq!(collisions.message, "2 Prüfung(en) mit Kollisionen");
        assert!(collisions
            .detail
            .as_deref()
            .unwrap()
            .contains("A: Raumbelegung kollidiert."));

        assert_eq!(issues[1].message, "1 Prüfung(en) ohne vollständige Kommission");
        assert_eq!(issues[1].detail.as_deref(), Some("C"));
        assert_eq!(issues[2].detail.as_deref(), Some("C"));
        // backup exam still counts as a second exam for S1
        assert_eq!(issues[3].detail.as_deref(), Some("S1"));
    }

    #[test]
    fn test_consistency_warning_reported() {
        let mut snap = PlanningSnapshot::new()
            .with_exam(full_exam("A", "S1", "R1", 0))
            .with_exam(full_exam("B", "S2", "R1", 3).with_prep_room("P2"));
        snap.teachers = staff();

        let issues = run_preflight(0, &snap, &PlanningConfig::default());
        assert_eq!(ids(&issues), vec!["consistency"]);
        assert_eq!(issues[0].message, "2 Prüfung(en) mit Konsistenzwarnung");
    }

    #[test]
    fn test_workload_imbalance() {
        let mut snap = PlanningSnapshot::new().with_exam(full_exam("A", "S1", "R1", 0));
        snap.teachers = staff();
        snap.teachers.push(Teacher::new("T4", "VIE"));
        snap.teachers.push(Teacher::new("T5", "FUE"));
        snap.supervisions = vec![
            Supervision::new("A1", "Flur", "T4", 0, "08:00", 480),
            Supervision::new("A2", "Flur", "T5", 0, "12:00", 60),
        ];
        // T1..T3 = 1, T4 = 8, T5 = 1 → average 2.4, limit 4.32

        let issues = run_preflight(0, &snap, &PlanningConfig::default());
        assert_eq!(ids(&issues), vec!["workload-imbalance"]);
        assert_eq!(issues[0].detail.as_deref(), Some("VIE (8.0 Punkte)"));

        let mut relaxed = PlanningConfig::default();
        relaxed.preflight.imbalance_factor = 4.0;
        assert!(run_preflight(0, &snap, &relaxed).is_empty());
    }
}
