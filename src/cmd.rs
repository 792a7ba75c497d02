//! Command implementations for the CLI interface.
//!
//! Each subcommand hands off to one front end: the numbered console menu, the
//! full-screen window, or shell completion generation.

use std::io;

use anyhow::Context;
use chrono::Local;
use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::Cli;
use crate::console::Console;
use crate::db::parse_due_input;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the numbered console menu (priority tasks).
    Console,

    /// Open the full-screen task window (tasks with due dates).
    Ui {
        /// Pre-fill the due date field, YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        due: Option<String>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Run the console menu on stdin/stdout.
pub fn cmd_console() -> anyhow::Result<()> {
    info!("starting console menu");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run().context("console I/O failed")
}

/// Launch the task window.
pub fn cmd_ui(due: Option<String>) -> anyhow::Result<()> {
    let default_due = match due {
        Some(s) => parse_due_input(&s)?,
        None => Local::now().date_naive(),
    };
    info!(%default_due, "starting task window");
    run_tui(default_due).context("UI error")
}

/// Print a completion script for `shell` to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "todo", &mut io::stdout());
}

/// Dispatch a parsed subcommand; no subcommand means the console menu.
pub fn dispatch(command: Option<Commands>) -> anyhow::Result<()> {
    match command {
        None | Some(Commands::Console) => cmd_console(),
        Some(Commands::Ui { due }) => cmd_ui(due),
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
            Ok(())
        }
    }
}
