use clap::Parser;
use std::path::PathBuf;

use crate::script::Shell;

/// treescript – turn a text outline into a runnable scaffold script
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Outline file to read ("-" or absent reads stdin)
    #[arg(value_name = "OUTLINE", conflicts_with = "sample")]
    pub outline: Option<PathBuf>,

    /// Script dialect to generate
    #[arg(short, long, value_enum, default_value_t = Shell::Cmd)]
    pub shell: Shell,

    /// Write the generated script to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy the generated script to the system clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// Preview the parsed tree and script in a full-screen TUI.
    /// Needs an OUTLINE file or --sample, since stdin is the terminal.
    #[arg(short, long)]
    pub interactive: bool,

    /// Use the built-in sample outline instead of reading input
    #[arg(long)]
    pub sample: bool,
}
