//! `wavemap` - CLI for the project showcase deriver
//!
//! This binary scans the projects media directory and prints the derived
//! records, a single record, aggregate statistics, or the effective
//! configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use clap::Parser;

use wavemap::cli::{
    Cli, Command, ConfigCommand, OutputFormat, ScanCommand, ShowCommand, StatsCommand,
};
use wavemap::{
    init_logging, CollectingSink, Config, ProjectRecord, ScanStats, Scanner, TracingSink,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Scan(cmd) => handle_scan(config, &cmd),
        Command::Show(cmd) => handle_show(config, &cmd),
        Command::Stats(cmd) => handle_stats(config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Apply per-command overrides on top of the loaded configuration.
fn with_overrides(mut config: Config, root: Option<&Path>, seed: Option<u64>) -> Config {
    if let Some(root) = root {
        config.scan.root = root.to_path_buf();
    }
    if let Some(seed) = seed {
        config.map.jitter_seed = Some(seed);
    }
    config
}

fn handle_scan(config: Config, cmd: &ScanCommand) -> anyhow::Result<()> {
    let config = with_overrides(config, cmd.root.as_deref(), cmd.seed);
    let mut sink = TracingSink;
    let records = Scanner::new(config)
        .scan(&mut sink)
        .context("failed to scan projects root")?;
    print_records(&records, cmd.format)
}

fn print_records(records: &[ProjectRecord], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
        OutputFormat::Table => {
            println!(
                "{:<24} {:<32} {:>7} {:>7} {:>6}",
                "ID", "LOCATION", "X%", "Y%", "MEDIA"
            );
            for record in records {
                println!(
                    "{:<24} {:<32} {:>7.1} {:>7.1} {:>6}",
                    record.id,
                    record.location,
                    record.coordinates.x,
                    record.coordinates.y,
                    record.media.len()
                );
            }
        }
        OutputFormat::Plain => {
            for record in records {
                println!("{}\t{}", record.id, record.location);
            }
        }
    }
    Ok(())
}

fn handle_show(config: Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let config = with_overrides(config, cmd.root.as_deref(), None);
    let mut sink = TracingSink;
    let record = Scanner::new(config)
        .find(&cmd.id, &mut sink)
        .with_context(|| format!("failed to derive project '{}'", cmd.id))?;

    if cmd.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{}", record.name);
    println!("  Location:    {}", record.location);
    println!(
        "  Coordinates: {:.1}%, {:.1}%",
        record.coordinates.x, record.coordinates.y
    );
    println!("  Cover:       {}", record.cover);
    println!("  Media:");
    for path in &record.media {
        println!("    {path}");
    }
    Ok(())
}

fn handle_stats(config: Config, cmd: &StatsCommand) -> anyhow::Result<()> {
    let config = with_overrides(config, cmd.root.as_deref(), None);
    let mut sink = CollectingSink::new();
    let records = Scanner::new(config)
        .scan(&mut sink)
        .context("failed to scan projects root")?;
    let stats = ScanStats::summarize(&records, sink.len());

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("wavemap scan statistics");
    println!("-----------------------");
    println!("Projects:  {}", stats.project_count);
    println!("Images:    {}", stats.image_count);
    println!("Videos:    {}", stats.video_count);
    println!();
    println!("By country:");
    for (country, count) in &stats.country_counts {
        println!("  {country:<20} {count}");
    }
    if !sink.is_empty() {
        println!();
        println!("Warnings:");
        for event in sink.events() {
            println!("  {event}");
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Scan]");
                println!("  Projects root:  {}", config.scan.root.display());
                println!("  Media base URL: {}", config.scan.media_base_url);
                println!();
                println!("[Map]");
                println!(
                    "  Jitter band:    {:.1}% - {:.1}%",
                    config.map.jitter_min_pct, config.map.jitter_max_pct
                );
                match config.map.jitter_seed {
                    Some(seed) => println!("  Jitter seed:    {seed}"),
                    None => println!("  Jitter seed:    (thread RNG)"),
                }
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
