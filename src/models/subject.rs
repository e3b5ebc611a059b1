//! Subject catalog entries.

use serde::{Deserialize, Serialize};

/// A subject.
///
/// Exams refer to subjects by display name, not id; use [`find_by_name`]
/// to resolve them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Display name, matched against `Exam::subject`.
    pub name: String,
    /// Abbreviation.
    #[serde(default)]
    pub short_name: String,
    /// Examiner and protocol-taker swap roles halfway (display only).
    #[serde(default)]
    pub is_combined: bool,
}

impl Subject {
    /// Creates a subject.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            short_name: String::new(),
            is_combined: false,
        }
    }

    /// Sets the abbreviation.
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Marks the subject as combined.
    pub fn combined(mut self) -> Self {
        self.is_combined = true;
        self
    }
}

/// Resolves a subject by its display name.
pub fn find_by_name<'a>(subjects: &'a [Subject], name: &str) -> Option<&'a Subject> {
    subjects.iter().find(|s| s.name == name)
}
