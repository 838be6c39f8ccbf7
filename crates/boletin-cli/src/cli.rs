//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Boletin - watch a publication index, enrich new documents, publish reports.
#[derive(Debug, Parser)]
#[command(name = "boletin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "boletin.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute one full run (discover, enrich, report, notify)
    Run,

    /// Regenerate the reports from the stored corpus without a run
    Report,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::parse_from(["boletin"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("boletin.toml"));
    }

    #[test]
    fn test_run_command() {
        let cli = Cli::parse_from(["boletin", "run"]);
        assert!(matches!(cli.command, Some(Command::Run)));
    }

    #[test]
    fn test_report_command_with_config() {
        let cli = Cli::parse_from(["boletin", "--config", "/etc/boletin.toml", "report"]);
        assert!(matches!(cli.command, Some(Command::Report)));
        assert_eq!(cli.config, PathBuf::from("/etc/boletin.toml"));
    }
}
