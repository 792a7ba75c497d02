//! Enumerations and field types for task management.
//!
//! This module defines the priority tiers used by the console list and the
//! sorting algorithms it can demonstrate.

use std::fmt;

/// Priority tier for console tasks. The discriminant is the sort rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Priority {
    /// Parse user input leniently. Anything unrecognised is `Low`.
    pub fn parse_lenient(s: &str) -> Priority {
        match s.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            _ => Priority::Low,
        }
    }

    /// Numeric rank, lower sorts first.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(format_priority(*self))
    }
}

/// Format a priority for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

/// Elementary sorting algorithms available from the console menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
}

impl SortAlgorithm {
    /// Heading used when printing a sorted listing.
    pub fn label(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
        }
    }
}
