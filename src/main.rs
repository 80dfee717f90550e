mod cli;
mod clipboard;
mod outline;
mod script;
mod tui;
mod workflow;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Clipboard daemon mode bypasses argument parsing entirely. This should
    // stay in main.rs as it's an early exit.
    if clipboard::check_and_run_daemon_if_requested()? {
        return Ok(());
    }

    let cli_args = cli::Cli::parse();

    workflow::run_treescript(cli_args)
}
