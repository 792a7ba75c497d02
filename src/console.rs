//! Numbered console menu over a `PriorityList`.
//!
//! The menu is generic over its input and output so it can run against a real
//! terminal or an in-memory buffer. Every choice runs to completion before the
//! menu is printed again.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::db::{parse_position, PriorityList};
use crate::error::TaskError;
use crate::fields::SortAlgorithm;
use crate::task::Task;

/// Menu entries in display order; the number is the position plus one.
pub const MENU_ITEMS: [&str; 10] = [
    "Add Task with Priority",
    "Show Tasks",
    "Search Task",
    "Sort Tasks (Bubble Sort)",
    "Sort Tasks (Selection Sort)",
    "Sort Tasks (Insertion Sort)",
    "Undo Last Task",
    "View Next Task (Queue)",
    "Delete Task",
    "Exit",
];

/// Parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Show,
    Search,
    Sort(SortAlgorithm),
    Undo,
    Next,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt.
    pub fn parse(s: &str) -> Option<MenuChoice> {
        match s.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Show),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Sort(SortAlgorithm::Bubble)),
            "5" => Some(MenuChoice::Sort(SortAlgorithm::Selection)),
            "6" => Some(MenuChoice::Sort(SortAlgorithm::Insertion)),
            "7" => Some(MenuChoice::Undo),
            "8" => Some(MenuChoice::Next),
            "9" => Some(MenuChoice::Delete),
            "10" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive console session.
pub struct Console<R, W> {
    input: R,
    output: W,
    list: PriorityList,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            list: PriorityList::new(),
        }
    }

    /// The task list driven by this session.
    pub fn list(&self) -> &PriorityList {
        &self.list
    }

    /// Give back the output sink, e.g. to inspect a buffer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user picks Exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return self.input_closed();
            };

            match MenuChoice::parse(&line) {
                Some(choice) => {
                    if !self.dispatch(choice)? {
                        return Ok(());
                    }
                }
                None => {
                    debug!(choice = %line.trim(), "invalid menu choice");
                    writeln!(self.output, "Invalid choice! Try again.")?;
                }
            }
        }
    }

    /// Run one menu action. Returns false once the session is over, either
    /// because Exit was picked or because input ran out mid-prompt.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::Add => {
                let Some(title) = self.prompt("Enter task name: ")? else {
                    return self.input_closed().map(|()| false);
                };
                let Some(priority) = self.prompt("Enter priority (High / Medium / Low): ")? else {
                    return self.input_closed().map(|()| false);
                };
                match self.list.add(&title, &priority) {
                    // The priority is echoed as typed; the stored tier may differ.
                    Ok(task) => writeln!(
                        self.output,
                        "✔ Task '{}' added with priority '{}'!",
                        task.title, priority
                    )?,
                    Err(e) => self.report(e)?,
                }
            }
            MenuChoice::Show => self.show_tasks()?,
            MenuChoice::Search => {
                let Some(key) = self.prompt("Enter task name to search: ")? else {
                    return self.input_closed().map(|()| false);
                };
                writeln!(self.output)?;
                writeln!(self.output, "🔎 Searching...")?;
                match self.list.linear_search(key.trim()) {
                    Some((idx, task)) => {
                        let msg = format!("✔ Found at position {}: {}", idx + 1, task);
                        writeln!(self.output, "{msg}")?;
                    }
                    None => writeln!(self.output, "❌ Task not found.")?,
                }
            }
            MenuChoice::Sort(algorithm) => {
                let sorted = self.list.sorted(algorithm);
                self.print_sorted(&sorted, algorithm)?;
            }
            MenuChoice::Undo => match self.list.undo() {
                Ok(task) => writeln!(self.output, "↩ Undo successful! Removed: {}", task.title)?,
                Err(e) => self.report(e)?,
            },
            MenuChoice::Next => match self.list.next_task() {
                Ok(task) => {
                    let msg = format!("⏭ Next task: {task}");
                    writeln!(self.output, "{msg}")?;
                }
                Err(e) => self.report(e)?,
            },
            MenuChoice::Delete => {
                let Some(raw) = self.prompt("Enter task number to delete: ")? else {
                    return self.input_closed().map(|()| false);
                };
                match parse_position(&raw).and_then(|n| self.list.delete_by_index(n)) {
                    Ok(task) => writeln!(self.output, "🗑 Deleted: {}", task.title)?,
                    Err(e) => self.report(e)?,
                }
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// End of input counts as Exit. The newline closes the pending prompt.
    fn input_closed(&mut self) -> io::Result<()> {
        debug!("input closed, leaving menu");
        writeln!(self.output)?;
        writeln!(self.output, "Goodbye!")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, " DSA TO-DO LIST")?;
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item)?;
        }
        Ok(())
    }

    fn show_tasks(&mut self) -> io::Result<()> {
        if self.list.is_empty() {
            writeln!(self.output, "No tasks yet.")?;
            return Ok(());
        }
        writeln!(self.output)?;
        writeln!(self.output, "📌 Your Tasks:")?;
        for (i, task) in self.list.tasks().iter().enumerate() {
            writeln!(self.output, "{}. {}  ({})", i + 1, task.title, task.priority)?;
        }
        Ok(())
    }

    fn print_sorted(&mut self, tasks: &[Task], algorithm: SortAlgorithm) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "📑 {} Result (High → Medium → Low):", algorithm.label())?;
        for task in tasks {
            writeln!(self.output, "- {task}")?;
        }
        Ok(())
    }

    fn report(&mut self, err: TaskError) -> io::Result<()> {
        debug!(error = %err, "rejected input");
        writeln!(self.output, "❌ {err}")
    }

    /// Print a prompt and read one line. `None` means end of input.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of ending the
    /// session.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;

    fn run_session(script: &str) -> (String, Vec<String>) {
        let mut console = Console::new(script.as_bytes(), Vec::new());
        console.run().unwrap();
        let titles = console.list().tasks().iter().map(|t| t.title.clone()).collect();
        let out = String::from_utf8(console.into_output()).unwrap();
        (out, titles)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Sort(SortAlgorithm::Selection)));
        assert_eq!(MenuChoice::parse("10"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("11"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_invalid_choice_reprints_menu() {
        let (out, _) = run_session("42\n10\n");
        assert!(out.contains("Invalid choice! Try again."));
        assert_eq!(out.matches(" DSA TO-DO LIST").count(), 2);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_show_empty_list() {
        let (out, _) = run_session("2\n10\n");
        assert!(out.contains("No tasks yet."));
    }

    #[test]
    fn test_non_numeric_delete_index() {
        let (out, titles) = run_session("1\nRead\nhigh\n9\nfirst\n10\n");
        assert!(out.contains("❌ 'first' is not a number."));
        assert_eq!(titles, vec!["Read"]);
    }

    #[test]
    fn test_negative_delete_index_is_out_of_range() {
        let (out, titles) = run_session("1\nRead\nhigh\n9\n-1\n9\n0\n10\n");
        assert!(out.contains("❌ Invalid task number -1 (have 1 task(s))."));
        assert!(out.contains("❌ Invalid task number 0 (have 1 task(s))."));
        assert!(!out.contains("is not a number"));
        assert_eq!(titles, vec!["Read"]);
    }

    #[test]
    fn test_priority_is_echoed_as_typed() {
        let mut console = Console::new(&b"1\nPlan trip\nurgent\n10\n"[..], Vec::new());
        console.run().unwrap();
        assert_eq!(console.list().tasks()[0].priority, Priority::Low);
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("✔ Task 'Plan trip' added with priority 'urgent'!"));
    }

    #[test]
    fn test_invalid_utf8_line_is_replaced_not_fatal() {
        let script = b"1\nBuy \xff milk\nHigh\n2\n10\n";
        let mut console = Console::new(&script[..], Vec::new());
        console.run().unwrap();
        assert_eq!(console.list().tasks()[0].title, "Buy \u{FFFD} milk");
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("1. Buy \u{FFFD} milk  (High)"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_exit_prints_goodbye_once() {
        let (out, _) = run_session("10\n");
        assert_eq!(out.matches("Goodbye!").count(), 1);
        assert!(out.ends_with("Enter your choice: Goodbye!\n"));
    }

    #[test]
    fn test_eof_mid_prompt_exits_cleanly() {
        let (out, titles) = run_session("1\nHalf typed");
        assert!(out.contains("Enter priority (High / Medium / Low): "));
        assert!(out.ends_with("Goodbye!\n"));
        assert!(titles.is_empty());
    }
}
