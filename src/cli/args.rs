//! CLI argument definitions.
//!
//! The check itself takes no arguments; the flags here only control
//! logging and styling.

use clap::Parser;

/// mongocheck - Verify that a local environment is ready to talk to MongoDB.
#[derive(Debug, Parser)]
#[command(name = "mongocheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
