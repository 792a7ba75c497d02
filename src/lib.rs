//! # todo - a small in-memory to-do list
//!
//! Two front ends over the same handful of list routines:
//!
//! - **Console menu** (`todo` or `todo console`): tasks with a High / Medium /
//!   Low priority, linear search, bubble / selection / insertion sort, a
//!   single-level undo and a "next task" queue.
//! - **Task window** (`todo ui`): tasks with a `YYYY-MM-DD` due date, binary
//!   search by title and automatic selection of the task due first.
//!
//! ## Quick Start
//!
//! ```bash
//! # Numbered menu
//! todo
//!
//! # Full-screen window, due date field starting at a given day
//! todo ui --due 2025-01-05
//!
//! # Shell completions
//! todo completions zsh > _todo
//! ```
//!
//! Nothing is written to disk. Tasks are gone when the program exits.

pub mod cli;
pub mod cmd;
pub mod console;
pub mod db;
pub mod error;
pub mod fields;
pub mod sort;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod utils;
}

pub use db::{DueList, PriorityList};
pub use error::TaskError;
pub use fields::{Priority, SortAlgorithm};
pub use task::{DatedTask, Task};
