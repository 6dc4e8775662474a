//! Shrine of Disorder - offline simulator
//!
//! Runs shrine activations against a catalog and party read from RON files,
//! the same way the host would, and prints the results as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use shrine_of_disorder::config::{default_settings_path, SETTINGS};
use shrine_of_disorder::shrine::session_rng;
use shrine_of_disorder::{ActivationOutcome, Authority, Inventory, ItemCatalog, ShrinePlugin, ShrineSettings};

/// Shrine of Order simulator
#[derive(Parser)]
#[command(name = "shrine-sim")]
#[command(about = "Simulate Shrine of Disorder activations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Activate the shrine against a party and print the result
    Simulate(Simulate),

    /// Write the default settings file
    ExportConfig {
        /// Destination (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// List every setting with its default and description
    DescribeConfig,
}

#[derive(Args)]
struct Simulate {
    /// Drop lists per tier (RON map of tier to item ids)
    #[arg(long)]
    catalog: PathBuf,

    /// Party inventories (RON list)
    #[arg(long)]
    party: PathBuf,

    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Session seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Index of the activating player in the party
    #[arg(long, default_value_t = 0)]
    activator: usize,

    /// Number of consecutive activations
    #[arg(long, default_value_t = 1)]
    activations: u32,

    /// Run as a connected client instead of the host
    #[arg(long)]
    client: bool,
}

#[derive(Serialize)]
struct SimulationReport {
    seed: u64,
    outcomes: Vec<Option<ActivationOutcome>>,
    party: Vec<Inventory>,
}

fn read_ron<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    ron::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

impl Simulate {
    fn execute(self) -> Result<()> {
        let settings_path = self.settings.unwrap_or_else(default_settings_path);
        let settings = ShrineSettings::load_or_default(&settings_path);
        let catalog: ItemCatalog = read_ron(&self.catalog)?;
        let mut party: Vec<Inventory> = read_ron(&self.party)?;

        let mut plugin = ShrinePlugin::new(settings);
        plugin.on_run_start(catalog);

        let authority = if self.client { Authority::Client } else { Authority::Server };
        let mut rng = session_rng(self.seed);

        let outcomes = (0..self.activations)
            .map(|_| plugin.on_shrine_activated(authority, &mut party, self.activator, &mut rng))
            .collect();

        plugin.on_run_end();

        let report = SimulationReport {
            seed: self.seed,
            outcomes,
            party,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(cmd) => cmd.execute(),
        Command::ExportConfig { path } => {
            let path = path.unwrap_or_else(default_settings_path);
            ShrineSettings::default()
                .export(&path)
                .with_context(|| format!("failed to export settings to {}", path.display()))
        }
        Command::DescribeConfig => {
            for setting in SETTINGS {
                println!("{} (default: {})", setting.qualified_key(), setting.default);
                println!("    {}", setting.description);
            }
            Ok(())
        }
    }
}
