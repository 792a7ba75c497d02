//! In-memory task lists and related utility functions.
//!
//! `PriorityList` backs the console menu: a task list plus an undo stack and a
//! pending queue. `DueList` backs the window: tasks with due dates, searched by
//! binary search and pre-selected by earliest due date. Nothing here touches
//! the filesystem; both lists live for one process.

use std::collections::VecDeque;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::TaskError;
use crate::fields::{Priority, SortAlgorithm};
use crate::sort::{
    binary_search_by_key, bubble_sort_by_key, insertion_sort_by_key, selection_sort_by_key,
};
use crate::task::{DatedTask, Task};

/// Console task list with undo and a "next task" queue.
#[derive(Debug, Default)]
pub struct PriorityList {
    tasks: Vec<Task>,
    undo_stack: Vec<Task>,
    // Only ever peeked. Deleted tasks stay in here.
    queue: VecDeque<Task>,
}

impl PriorityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. The priority text is parsed leniently, defaulting to Low.
    pub fn add(&mut self, title: &str, priority: &str) -> Result<&Task, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let task = Task::new(title, Priority::parse_lenient(priority));
        debug!(title = %task.title, priority = %task.priority, "adding task");

        self.undo_stack.push(task.clone());
        self.queue.push_back(task.clone());
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// First task whose title equals `key`, ignoring case. Index is 0-based.
    pub fn linear_search(&self, key: &str) -> Option<(usize, &Task)> {
        self.tasks.iter().enumerate().find(|(_, t)| t.title_matches(key))
    }

    /// A copy of the list ordered High, Medium, Low using the given algorithm.
    pub fn sorted(&self, algorithm: SortAlgorithm) -> Vec<Task> {
        let mut copy = self.tasks.clone();
        let key = |t: &Task| t.priority.rank();
        match algorithm {
            SortAlgorithm::Bubble => bubble_sort_by_key(&mut copy, key),
            SortAlgorithm::Selection => selection_sort_by_key(&mut copy, key),
            SortAlgorithm::Insertion => insertion_sort_by_key(&mut copy, key),
        }
        copy
    }

    /// Undo the most recent add.
    ///
    /// The popped task is removed by value: the first equal entry in the list
    /// goes, which is not the newest one when duplicates exist.
    pub fn undo(&mut self) -> Result<Task, TaskError> {
        let last = self.undo_stack.pop().ok_or(TaskError::NothingToUndo)?;
        match self.tasks.iter().position(|t| *t == last) {
            Some(idx) => {
                let removed = self.tasks.remove(idx);
                info!(title = %removed.title, position = idx + 1, "undid add");
                Ok(removed)
            }
            None => Err(TaskError::UndoTargetMissing(last.title)),
        }
    }

    /// Oldest task ever added, without removing it.
    pub fn next_task(&self) -> Result<&Task, TaskError> {
        self.queue.front().ok_or(TaskError::NoPendingTasks)
    }

    /// Remove the task at a 1-based position. Zero and negative positions
    /// are out of range like any other.
    pub fn delete_by_index(&mut self, position: i64) -> Result<Task, TaskError> {
        let len = self.tasks.len();
        let Some(slot) = usize::try_from(position)
            .ok()
            .filter(|p| (1..=len).contains(p))
        else {
            return Err(TaskError::InvalidIndex { index: position, len });
        };
        let removed = self.tasks.remove(slot - 1);
        info!(title = %removed.title, position, "deleted task");
        Ok(removed)
    }
}

/// Window task list with due dates.
#[derive(Debug, Default)]
pub struct DueList {
    tasks: Vec<DatedTask>,
}

impl DueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task after validating the title and `YYYY-MM-DD` due date.
    pub fn add(&mut self, title: &str, due: &str) -> Result<&DatedTask, TaskError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let due = parse_due_input(due)?;
        debug!(title, %due, "adding dated task");
        self.tasks.push(DatedTask::new(title, due));
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn tasks(&self) -> &[DatedTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove the task at a 0-based list selection.
    pub fn remove(&mut self, selection: Option<usize>) -> Result<DatedTask, TaskError> {
        let idx = selection.ok_or(TaskError::NoSelection)?;
        if idx >= self.tasks.len() {
            return Err(TaskError::NoSelection);
        }
        let removed = self.tasks.remove(idx);
        info!(title = %removed.title, "removed task");
        Ok(removed)
    }

    /// Drop every task. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.tasks.len();
        self.tasks.clear();
        info!(count = n, "cleared all tasks");
        n
    }

    /// First task whose title equals `key`, ignoring case. Index is 0-based.
    pub fn linear_search(&self, key: &str) -> Option<(usize, &DatedTask)> {
        let key = key.to_lowercase();
        self.tasks.iter().enumerate().find(|(_, t)| t.folded_title() == key)
    }

    /// Sort a fresh copy by case-folded title and binary search it.
    pub fn binary_search(&self, key: &str) -> Option<&DatedTask> {
        let mut sorted: Vec<&DatedTask> = self.tasks.iter().collect();
        sorted.sort_by_cached_key(|t| t.folded_title());
        let target = key.to_lowercase();
        binary_search_by_key(&sorted, &target, |t| t.folded_title()).map(|i| sorted[i])
    }

    /// Index of the task due first; ties go to the earliest added.
    pub fn earliest_due_index(&self) -> Option<usize> {
        let mut best: Option<(usize, NaiveDate)> = None;
        for (i, t) in self.tasks.iter().enumerate() {
            match best {
                Some((_, due)) if t.due >= due => {}
                _ => best = Some((i, t.due)),
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_due_input(s: &str) -> Result<NaiveDate, TaskError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TaskError::InvalidDate(s.to_string()))
}

/// Parse a task number typed at the console. Any integer is accepted here,
/// signed or not; range checks belong to `PriorityList::delete_by_index`.
pub fn parse_position(s: &str) -> Result<i64, TaskError> {
    let s = s.trim();
    s.parse::<i64>().map_err(|_| TaskError::NotANumber(s.to_string()))
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PriorityList {
        let mut list = PriorityList::new();
        list.add("Buy milk", "High").unwrap();
        list.add("Clean house", "Low").unwrap();
        list.add("Pay bills", "Medium").unwrap();
        list
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let list = sample();
        assert_eq!(titles(list.tasks()), vec!["Buy milk", "Clean house", "Pay bills"]);
        assert_eq!(list.tasks()[2].priority, Priority::Medium);
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let mut list = sample();
        assert_eq!(list.add("   ", "High").unwrap_err(), TaskError::EmptyTitle);
        assert_eq!(list.len(), 3);
        assert!(list.undo().is_ok());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_unknown_priority_defaults_to_low() {
        let mut list = PriorityList::new();
        let task = list.add("Water plants", "whenever").unwrap();
        assert_eq!(task.priority, Priority::Low);
    }

    #[test]
    fn test_linear_search_is_case_insensitive() {
        let list = sample();
        let (idx, task) = list.linear_search("PAY BILLS").unwrap();
        assert_eq!(idx, 2);
        assert_eq!(task.title, "Pay bills");
        assert!(list.linear_search("Pay").is_none());
    }

    #[test]
    fn test_bubble_sort_scenario() {
        let list = sample();
        let sorted = list.sorted(SortAlgorithm::Bubble);
        assert_eq!(titles(&sorted), vec!["Buy milk", "Pay bills", "Clean house"]);
        // Stored list is untouched.
        assert_eq!(titles(list.tasks()), vec!["Buy milk", "Clean house", "Pay bills"]);
    }

    #[test]
    fn test_all_sorts_agree_on_priorities() {
        let mut list = PriorityList::new();
        let entries = [
            ("a", "low"),
            ("b", "high"),
            ("c", "medium"),
            ("d", "high"),
            ("e", "low"),
        ];
        for (title, p) in entries {
            list.add(title, p).unwrap();
        }
        let mut input: Vec<String> = titles(list.tasks()).iter().map(|s| s.to_string()).collect();
        input.sort();
        for algo in [SortAlgorithm::Bubble, SortAlgorithm::Selection, SortAlgorithm::Insertion] {
            let sorted = list.sorted(algo);
            let ranks: Vec<u8> = sorted.iter().map(|t| t.priority.rank()).collect();
            assert_eq!(ranks, vec![1, 1, 2, 3, 3], "{:?}", algo);
            let mut got: Vec<String> = sorted.iter().map(|t| t.title.clone()).collect();
            got.sort();
            assert_eq!(got, input, "{:?}", algo);
        }
    }

    #[test]
    fn test_undo_removes_most_recent_add() {
        let mut list = sample();
        let removed = list.undo().unwrap();
        assert_eq!(removed.title, "Pay bills");
        assert_eq!(titles(list.tasks()), vec!["Buy milk", "Clean house"]);
    }

    #[test]
    fn test_undo_with_duplicates_removes_first_equal_entry() {
        let mut list = PriorityList::new();
        list.add("Stretch", "Low").unwrap();
        list.add("Read", "High").unwrap();
        list.add("Stretch", "Low").unwrap();
        list.undo().unwrap();
        // The earlier "Stretch" went, the later one stays.
        assert_eq!(titles(list.tasks()), vec!["Read", "Stretch"]);
    }

    #[test]
    fn test_undo_empty_and_missing_target() {
        let mut list = PriorityList::new();
        assert_eq!(list.undo().unwrap_err(), TaskError::NothingToUndo);

        list.add("Only", "High").unwrap();
        list.delete_by_index(1).unwrap();
        assert_eq!(list.undo().unwrap_err(), TaskError::UndoTargetMissing("Only".into()));
        assert_eq!(list.undo().unwrap_err(), TaskError::NothingToUndo);
    }

    #[test]
    fn test_next_task_is_never_trimmed() {
        let mut list = PriorityList::new();
        assert_eq!(list.next_task().unwrap_err(), TaskError::NoPendingTasks);
        let mut list2 = sample();
        assert_eq!(list2.next_task().unwrap().title, "Buy milk");
        list2.delete_by_index(1).unwrap();
        assert_eq!(list2.next_task().unwrap().title, "Buy milk");
        list.add("x", "low").unwrap();
        assert_eq!(list.next_task().unwrap().title, "x");
    }

    #[test]
    fn test_delete_by_index() {
        let mut list = sample();
        assert_eq!(
            list.delete_by_index(0).unwrap_err(),
            TaskError::InvalidIndex { index: 0, len: 3 }
        );
        assert_eq!(
            list.delete_by_index(4).unwrap_err(),
            TaskError::InvalidIndex { index: 4, len: 3 }
        );
        assert_eq!(
            list.delete_by_index(-1).unwrap_err(),
            TaskError::InvalidIndex { index: -1, len: 3 }
        );
        assert_eq!(list.len(), 3);
        assert_eq!(list.delete_by_index(2).unwrap().title, "Clean house");
        assert_eq!(titles(list.tasks()), vec!["Buy milk", "Pay bills"]);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(" 3 "), Ok(3));
        assert_eq!(parse_position("two"), Err(TaskError::NotANumber("two".into())));
        assert_eq!(parse_position("-1"), Ok(-1));
        assert_eq!(parse_position("1.5"), Err(TaskError::NotANumber("1.5".into())));
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_list_rejects_bad_input() {
        let mut list = DueList::new();
        list.add("Alpha", "2025-01-10").unwrap();
        assert_eq!(
            list.add("Beta", "2025-02-30").unwrap_err(),
            TaskError::InvalidDate("2025-02-30".into())
        );
        assert_eq!(
            list.add("Beta", "next week").unwrap_err(),
            TaskError::InvalidDate("next week".into())
        );
        assert_eq!(list.add("", "2025-01-01").unwrap_err(), TaskError::EmptyTitle);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_earliest_due_scenario() {
        let mut list = DueList::new();
        assert_eq!(list.earliest_due_index(), None);
        list.add("Alpha", "2025-01-10").unwrap();
        list.add("Beta", "2025-01-05").unwrap();
        list.add("Gamma", "2025-01-05").unwrap();
        let idx = list.earliest_due_index().unwrap();
        assert_eq!(list.tasks()[idx].title, "Beta");
        assert_eq!(list.tasks()[idx].due, date(2025, 1, 5));
    }

    #[test]
    fn test_binary_and_linear_search_agree() {
        let mut list = DueList::new();
        let entries = [
            ("Walk dog", "2025-03-01"),
            ("alpha", "2025-03-02"),
            ("Zebra", "2025-03-03"),
            ("mid", "2025-03-04"),
        ];
        for (t, d) in entries {
            list.add(t, d).unwrap();
        }
        for key in ["walk DOG", "Alpha", "zebra", "MID", "missing", ""] {
            let linear = list.linear_search(key).map(|(_, t)| t);
            assert_eq!(list.binary_search(key), linear, "{key}");
        }
        assert_eq!(list.binary_search("zebra").unwrap().due, date(2025, 3, 3));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut list = DueList::new();
        list.add("Alpha", "2025-01-10").unwrap();
        list.add("Beta", "2025-01-05").unwrap();
        assert_eq!(list.remove(None).unwrap_err(), TaskError::NoSelection);
        assert_eq!(list.remove(Some(5)).unwrap_err(), TaskError::NoSelection);
        assert_eq!(list.remove(Some(0)).unwrap().title, "Alpha");
        assert_eq!(list.clear(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long title", 6), "a lon…");
    }
}
