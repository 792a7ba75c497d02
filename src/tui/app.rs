//! Main application logic for the task window.
//!
//! This module contains the `App` struct which owns the dated task list,
//! handles key input, renders the window, and drives the modal dialogs
//! (messages, delete-all confirmation, search prompt).

use std::io;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::debug;

use crate::db::{truncate, DueList};
use crate::task::DatedTask;
use crate::tui::{
    colors::{DARK_RED, DEEP_TEAL, SAGE, SAGE_DARK, SLATE},
    enums::{AppState, Focus, Message, MessageKind},
    input::InputField,
    utils::{centered_rect, cursor_x},
};

/// Labels of the button bar, paired with the key that triggers each.
const BUTTONS: [(&str, &str); 5] = [
    ("Enter", "Add Task"),
    ("Del", "Remove Task"),
    ("D", "Delete All"),
    ("/", "Search Task"),
    ("q", "Exit"),
];

/// Window state: the dated task list plus everything on screen.
pub struct App {
    state: AppState,
    list: DueList,
    list_state: ListState,
    title: InputField,
    due: InputField,
    search: InputField,
    focus: Focus,
    message: Option<Message>,
    status_message: String,
}

impl App {
    /// Create an empty window with the due date field pre-filled.
    pub fn new(default_due: NaiveDate) -> Self {
        App {
            state: AppState::Main,
            list: DueList::new(),
            list_state: ListState::default(),
            title: InputField::new(),
            due: InputField::with_value(&default_due.format("%Y-%m-%d").to_string()),
            search: InputField::new(),
            focus: Focus::Title,
            message: None,
            status_message: String::new(),
        }
    }

    pub fn tasks(&self) -> &[DatedTask] {
        self.list.tasks()
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// The task currently highlighted in the list.
    pub fn selected_task(&self) -> Option<&DatedTask> {
        self.list_state.selected().and_then(|i| self.list.tasks().get(i))
    }

    /// Refresh the list view: select the task due first.
    fn reload(&mut self) {
        self.list_state.select(self.list.earliest_due_index());
    }

    fn show_message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.message = Some(Message {
            kind,
            text: text.into(),
        });
        self.state = AppState::Message;
    }

    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Add a task from the title and due date fields.
    fn add_task(&mut self) {
        match self.list.add(&self.title.value, &self.due.value) {
            Ok(task) => {
                let msg = format!("Added '{}'", truncate(&task.title, 40));
                self.title.clear();
                self.reload();
                self.set_status_message(msg);
            }
            Err(e) => {
                debug!(error = %e, "rejected new task");
                self.show_message(MessageKind::InputError, e.to_string());
            }
        }
    }

    /// Remove the highlighted task.
    fn remove_selected(&mut self) {
        match self.list.remove(self.list_state.selected()) {
            Ok(task) => {
                self.reload();
                self.set_status_message(format!("Removed '{}'", truncate(&task.title, 40)));
            }
            Err(e) => self.show_message(MessageKind::Error, e.to_string()),
        }
    }

    fn confirm_delete_all(&mut self) {
        let n = self.list.clear();
        self.reload();
        self.set_status_message(format!("Deleted {} task(s)", n));
    }

    fn open_search(&mut self) {
        if self.list.is_empty() {
            self.show_message(MessageKind::Info, "No tasks to search.");
            return;
        }
        self.search.clear();
        self.state = AppState::Search;
    }

    fn submit_search(&mut self) {
        self.state = AppState::Main;
        let key = self.search.value.trim().to_string();
        if key.is_empty() {
            return;
        }
        debug!(key = %key, "binary search");
        match self.list.binary_search(&key) {
            Some(task) => {
                let text = format!("Task: {}\nDue: {}", task.title, task.due.format("%Y-%m-%d"));
                self.show_message(MessageKind::Found, text);
            }
            None => self.show_message(MessageKind::NotFound, "Task not found."),
        }
    }

    fn focused_field(&mut self) -> Option<&mut InputField> {
        match self.focus {
            Focus::Title => Some(&mut self.title),
            Focus::Due => Some(&mut self.due),
            Focus::List => None,
        }
    }

    /// Handle one key press. Returns true if the window should close.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        self.status_message.clear();

        match self.state {
            AppState::Message => {
                self.message = None;
                self.state = AppState::Main;
                false
            }
            AppState::Confirm => {
                match key {
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                        self.state = AppState::Main;
                        self.confirm_delete_all();
                    }
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                        self.state = AppState::Main;
                    }
                    _ => {}
                }
                false
            }
            AppState::Search => {
                match key {
                    KeyCode::Esc => self.state = AppState::Main,
                    KeyCode::Enter => self.submit_search(),
                    other => edit_field(&mut self.search, other),
                }
                false
            }
            AppState::Main => self.handle_main_input(key),
        }
    }

    fn handle_main_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return false;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return false;
            }
            _ => {}
        }

        if self.focus == Focus::List {
            match key {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Up => {
                    if let Some(selected) = self.list_state.selected() {
                        if selected > 0 {
                            self.list_state.select(Some(selected - 1));
                        }
                    } else if !self.list.is_empty() {
                        self.list_state.select(Some(0));
                    }
                }
                KeyCode::Down => {
                    if let Some(selected) = self.list_state.selected() {
                        if selected + 1 < self.list.len() {
                            self.list_state.select(Some(selected + 1));
                        }
                    } else if !self.list.is_empty() {
                        self.list_state.select(Some(0));
                    }
                }
                // Enter stands in for double-clicking an entry.
                KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => self.remove_selected(),
                KeyCode::Char('D') => self.state = AppState::Confirm,
                KeyCode::Char('/') | KeyCode::Char('s') => self.open_search(),
                KeyCode::Char('a') | KeyCode::Char('i') => self.focus = Focus::Title,
                _ => {}
            }
            return false;
        }

        match key {
            KeyCode::Enter => self.add_task(),
            KeyCode::Esc | KeyCode::Down => self.focus = Focus::List,
            other => {
                if let Some(field) = self.focused_field() {
                    edit_field(field, other);
                }
            }
        }
        false
    }

    /// Render the input row: title, due date and the add button.
    fn render_inputs(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(14), Constraint::Length(14)])
            .split(area);

        let title_input = Paragraph::new(self.title.value.as_str())
            .style(Style::default().fg(SLATE))
            .block(field_block("Task", self.state == AppState::Main && self.focus == Focus::Title));
        f.render_widget(title_input, chunks[0]);

        let due_input = Paragraph::new(self.due.value.as_str())
            .style(Style::default().fg(SLATE))
            .block(field_block("Due", self.state == AppState::Main && self.focus == Focus::Due));
        f.render_widget(due_input, chunks[1]);

        let add_button = Paragraph::new("Add Task")
            .alignment(Alignment::Center)
            .style(Style::default().bg(SAGE).fg(SLATE).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(add_button, chunks[2]);

        if self.state == AppState::Main {
            let cursor = match self.focus {
                Focus::Title => Some((chunks[0], self.title.cursor)),
                Focus::Due => Some((chunks[1], self.due.cursor)),
                Focus::List => None,
            };
            if let Some((rect, offset)) = cursor {
                f.set_cursor_position(Position::new(cursor_x(rect, offset), rect.y + 1));
            }
        }
    }

    /// Render the scrollable task list.
    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .list
            .tasks()
            .iter()
            .map(|t| ListItem::new(t.list_row()))
            .collect();

        let border_style = if self.focus == Focus::List {
            Style::default().fg(SAGE_DARK)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(format!("Tasks ({})", self.list.len()))
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .highlight_style(Style::default().bg(SAGE).fg(Color::Black))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_buttons(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, (key, label)) in BUTTONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!(" {} ", label),
                Style::default().bg(SAGE).fg(SLATE).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {}", key), Style::default().fg(Color::DarkGray)));
        }
        let bar = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP));
        f.render_widget(bar, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            let hints = match self.focus {
                Focus::List => "Tab: switch field | Enter/Del: remove | D: delete all | /: search",
                _ => "Tab: switch field | Enter: add task | Esc: go to list",
            };
            format!("Tasks: {} | {}", self.list.len(), hints)
        };
        let status = Paragraph::new(text).style(Style::default().bg(SAGE_DARK).fg(Color::Black));
        f.render_widget(status, area);
    }

    fn render_message(&self, f: &mut Frame, area: Rect) {
        let Some(message) = &self.message else {
            return;
        };
        let bg = match message.kind {
            MessageKind::InputError | MessageKind::Error => DARK_RED,
            _ => DEEP_TEAL,
        };
        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let mut text: Vec<Line> = vec![Line::from("")];
        text.extend(message.text.lines().map(|l| Line::from(l.to_string())));
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "Press any key to continue",
            Style::default().add_modifier(Modifier::ITALIC),
        )));

        let paragraph = Paragraph::new(text)
            .block(Block::default().title(message.kind.title()).borders(Borders::ALL))
            .style(Style::default().bg(bg).fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_confirm(&self, f: &mut Frame, area: Rect) {
        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Delete all tasks?",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press 'y' to confirm, 'n' to cancel"),
        ];
        let paragraph = Paragraph::new(text)
            .block(Block::default().title("Confirm Delete").borders(Borders::ALL))
            .style(Style::default().bg(DARK_RED).fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_search(&self, f: &mut Frame, area: Rect) {
        let area = centered_rect(50, 30, area);
        f.render_widget(Clear, area);

        let block = Block::default().title("Search Task").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(0)])
            .split(inner);
        f.render_widget(Paragraph::new("Enter task title:"), rows[0]);
        let field = Paragraph::new(self.search.value.as_str())
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(field, rows[1]);
        let hint = Paragraph::new("Enter: search  Esc: cancel")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, rows[2]);
        let x = cursor_x(rows[1], self.search.cursor);
        f.set_cursor_position(Position::new(x, rows[1].y + 1));
    }

    /// Draw the whole window and whichever dialog is open.
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(f.area());

        let header = Paragraph::new(Line::from(Span::styled(
            "My To-Do List",
            Style::default().fg(DEEP_TEAL).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        self.render_inputs(f, chunks[1]);
        self.render_list(f, chunks[2]);
        self.render_buttons(f, chunks[3]);
        self.render_status_bar(f, chunks[4]);

        let full = f.area();
        match self.state {
            AppState::Main => {}
            AppState::Message => self.render_message(f, full),
            AppState::Confirm => self.render_confirm(f, full),
            AppState::Search => self.render_search(f, full),
        }
    }

    /// Poll for one key event and handle it. Returns true if the window should close.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(false);
                }
                return Ok(self.handle_key(key.code, key.modifiers));
            }
        }
        Ok(false)
    }

    /// Main event loop for the window.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

/// Apply an editing key to a text field.
fn edit_field(field: &mut InputField, key: KeyCode) {
    match key {
        KeyCode::Char(c) => field.handle_char(c),
        KeyCode::Backspace => field.handle_backspace(),
        KeyCode::Delete => field.handle_delete(),
        KeyCode::Left => field.move_cursor_left(),
        KeyCode::Right => field.move_cursor_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(SAGE_DARK).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Block::default().title(title).borders(Borders::ALL).border_style(style)
}
