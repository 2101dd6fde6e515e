//! Command-line interface for wavemap.
//!
//! This module provides the CLI structure and command definitions for the
//! `wavemap` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, OutputFormat, ScanCommand, ShowCommand, StatsCommand};

/// wavemap - derive the project showcase from a media directory
///
/// Scans a directory of per-project media folders and emits the ordered
/// project records (map pins, covers, media lists) consumed by the site's
/// projects page.
#[derive(Debug, Parser)]
#[command(name = "wavemap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the projects root and print the derived records
    Scan(ScanCommand),

    /// Show a single project record
    Show(ShowCommand),

    /// Show aggregate scan statistics
    Stats(StatsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn stats_cli(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Stats(StatsCommand {
                root: None,
                json: false,
            }),
        }
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "wavemap");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        assert_eq!(
            stats_cli(0, true).verbosity(),
            crate::logging::Verbosity::Quiet
        );
    }

    #[test]
    fn test_verbosity_normal() {
        assert_eq!(
            stats_cli(0, false).verbosity(),
            crate::logging::Verbosity::Normal
        );
    }

    #[test]
    fn test_verbosity_verbose() {
        assert_eq!(
            stats_cli(1, false).verbosity(),
            crate::logging::Verbosity::Verbose
        );
    }

    #[test]
    fn test_verbosity_trace() {
        assert_eq!(
            stats_cli(2, false).verbosity(),
            crate::logging::Verbosity::Trace
        );
    }

    #[test]
    fn test_parse_scan() {
        let cli = Cli::try_parse_from(["wavemap", "scan"]).unwrap();
        assert!(matches!(cli.command, Command::Scan(_)));
    }

    #[test]
    fn test_parse_scan_with_flags() {
        let cli =
            Cli::try_parse_from(["wavemap", "scan", "--root", "/srv/media", "--seed", "9"])
                .unwrap();
        match cli.command {
            Command::Scan(cmd) => {
                assert_eq!(cmd.root, Some(PathBuf::from("/srv/media")));
                assert_eq!(cmd.seed, Some(9));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_scan_format() {
        let cli = Cli::try_parse_from(["wavemap", "scan", "--format", "json"]).unwrap();
        match cli.command {
            Command::Scan(cmd) => assert_eq!(cmd.format, OutputFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["wavemap", "show", "china-shanghai"]).unwrap();
        match cli.command {
            Command::Show(cmd) => assert_eq!(cmd.id, "china-shanghai"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_stats_json() {
        let cli = Cli::try_parse_from(["wavemap", "stats", "--json"]).unwrap();
        match cli.command {
            Command::Stats(cmd) => assert!(cmd.json),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["wavemap", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { .. })
        ));
    }

    #[test]
    fn test_parse_with_config_path() {
        let cli = Cli::try_parse_from(["wavemap", "-c", "/custom/config.toml", "stats"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_with_verbose() {
        let cli = Cli::try_parse_from(["wavemap", "-v", "stats"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_parse_with_quiet() {
        let cli = Cli::try_parse_from(["wavemap", "-q", "stats"]).unwrap();
        assert!(cli.quiet);
    }
}
