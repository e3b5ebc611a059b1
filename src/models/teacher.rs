//! Teacher model.
//!
//! Teachers fill the three commission roles of an exam (examiner, chair,
//! protocol) and take supervision duties.

use serde::{Deserialize, Serialize};

/// A member of staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Abbreviation used on plans (e.g. "MÜL").
    pub short_name: String,
    /// Part-time contract.
    #[serde(default)]
    pub is_part_time: bool,
    /// Member of the school leadership.
    #[serde(default)]
    pub is_leadership: bool,
    /// Subjects the teacher is qualified to examine.
    #[serde(default)]
    pub subject_ids: Vec<String>,
    /// Contracted hours, if known.
    #[serde(default)]
    pub target_hours: Option<f64>,
}

impl Teacher {
    /// Creates a teacher with only an id and short name.
    pub fn new(id: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: String::new(),
            last_name: String::new(),
            short_name: short_name.into(),
            is_part_time: false,
            is_leadership: false,
            subject_ids: Vec::new(),
            target_hours: None,
        }
    }

    /// Sets the full name.
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Adds a subject qualification.
    pub fn with_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_ids.push(subject_id.into());
        self
    }

    /// Marks the teacher as part-time.
    pub fn part_time(mut self) -> Self {
        self.is_part_time = true;
        self
    }

    /// Marks the teacher as school leadership.
    pub fn leadership(mut self) -> Self {
        self.is_leadership = true;
        self
    }

    /// Sets the contracted hours.
    pub fn with_target_hours(mut self, hours: f64) -> Self {
        self.target_hours = Some(hours);
        self
    }

    /// Whether the teacher may examine the given subject.
    pub fn teaches(&self, subject_id: &str) -> bool {
        self.subject_ids.iter().any(|s| s == subject_id)
    }

    /// Label for reports: short name, falling back to the id.
    pub fn label(&self) -> &str {
        if self.short_name.is_empty() {
            &self.id
        } else {
            &self.short_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_builder() {
        let t = Teacher::new("T1", "MÜL")
            .with_name("Anna", "Müller")
            .with_subject("sub-ma")
            .with_subject("sub-ph")
            .part_time()
            .with_target_hours(12.5);

        assert_eq!(t.label(), "MÜL");
        assert!(t.teaches("sub-ph"));
        assert!(!t.teaches("sub-de"));
        assert!(t.is_part_time);
        assert!(!t.is_leadership);
        assert_eq!(t.target_hours, Some(12.5));
    }

    #[test]
    fn test_label_fallback() {
        assert_eq!(Teacher::new("T9", "").label(), "T9");
    }
}
