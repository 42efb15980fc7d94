//! Horde CLI - headless runner for the NPC decision core.
//!
//! - `horde run` - simulate a seeded encounter and print a summary
//! - `horde config` - print the effective configuration as YAML

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use horde_core::AiConfig;

mod scenario;

use scenario::Roster;

#[derive(Parser)]
#[command(name = "horde")]
#[command(about = "Deterministic NPC decision core runner", version)]
struct Cli {
    /// YAML config file; missing keys keep their defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate an encounter
    Run {
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 600)]
        ticks: u64,

        /// Override the configured RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds covered by each tick
        #[arg(long, default_value_t = 16.0)]
        elapsed_ms: f32,

        #[arg(long, default_value_t = 3)]
        melee: u32,

        #[arg(long, default_value_t = 1)]
        minibosses: u32,

        #[arg(long, default_value_t = 2)]
        stalkers: u32,

        #[arg(long, default_value_t = 2)]
        chasers: u32,

        #[arg(long, default_value_t = 6)]
        flyers: u32,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Include the decision trace in the JSON summary
        #[arg(long, requires = "json")]
        trace: bool,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            ticks,
            seed,
            elapsed_ms,
            melee,
            minibosses,
            stalkers,
            chasers,
            flyers,
            json,
            trace,
        } => {
            let config = match seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            };
            let roster = Roster {
                melee,
                minibosses,
                stalkers,
                chasers,
                flyers,
            };
            run_scenario(config, &roster, ticks, elapsed_ms, json, trace)
        }
        Commands::Config => show_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> Result<AiConfig> {
    let Some(path) = path else {
        return Ok(AiConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AiConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn run_scenario(
    config: AiConfig,
    roster: &Roster,
    ticks: u64,
    elapsed_ms: f32,
    json: bool,
    trace: bool,
) -> Result<()> {
    tracing::info!(seed = config.seed, ticks, agents = roster.total(), "starting scenario");
    let summary = scenario::run(config, roster, ticks, elapsed_ms, trace)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Horde scenario");
    println!("  seed:                 {}", summary.seed);
    println!("  ticks:                {}", summary.ticks);
    println!("  agents:               {}", summary.agents);
    println!("  tree turns:           {}", summary.evaluated);
    println!("  flocking updates:     {}", summary.flocked);
    println!("  skipped:              {}", summary.skipped);
    println!("  attacks fired:        {}", summary.attacks_fired);
    println!("  damage dispatched:    {:.1}", summary.damage_dispatched);
    println!("  invariant violations: {}", summary.invariant_violations);
    Ok(())
}

fn show_config(config: &AiConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config).context("Failed to render config")?;
    print!("{yaml}");
    Ok(())
}
