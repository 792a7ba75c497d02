use clap::Parser;
use tracing_subscriber::EnvFilter;

use dsa_todo::cli::Cli;
use dsa_todo::cmd::dispatch;

fn main() {
    let cli = Cli::parse();

    // Without -v nothing is installed, so no log line can land on the
    // console prompts or the window's alternate screen.
    if let Some(directive) = cli.log_directive() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    if let Err(e) = dispatch(cli.command) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
