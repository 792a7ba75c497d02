//! Task data structures.
//!
//! The console list tracks a priority per task; the window list tracks a due
//! date instead.

use std::fmt;

use chrono::NaiveDate;

use crate::fields::Priority;

/// A console to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub priority: Priority,
}

impl Task {
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Task {
            title: title.into(),
            priority,
        }
    }

    /// Case-insensitive exact title comparison.
    pub fn title_matches(&self, key: &str) -> bool {
        self.title.to_lowercase() == key.to_lowercase()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.priority)
    }
}

/// A window to-do entry with a due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedTask {
    pub title: String,
    pub due: NaiveDate,
}

impl DatedTask {
    pub fn new(title: impl Into<String>, due: NaiveDate) -> Self {
        DatedTask {
            title: title.into(),
            due,
        }
    }

    /// Lowercased title used as the binary search key.
    pub fn folded_title(&self) -> String {
        self.title.to_lowercase()
    }

    /// Row text shown in the window list.
    pub fn list_row(&self) -> String {
        format!("• {}  |  Due: {}", self.title, self.due.format("%Y-%m-%d"))
    }
}
