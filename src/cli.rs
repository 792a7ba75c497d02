use clap::Parser;

use crate::cmd::Commands;

/// In-memory to-do list with a console menu and a terminal window.
/// Nothing is saved; tasks last as long as the process.
#[derive(Parser)]
#[command(name = "todo", version, about = "Personal to-do list")]
pub struct Cli {
    /// Log to stderr (-v warn, -vv info, -vvv debug, -vvvv trace). Off by default.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to the console menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Log filter directive for the chosen verbosity, `None` when logging is off.
    pub fn log_directive(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("dsa_todo=warn"),
            2 => Some("dsa_todo=info"),
            3 => Some("dsa_todo=debug"),
            _ => Some("dsa_todo=trace"),
        }
    }
}
