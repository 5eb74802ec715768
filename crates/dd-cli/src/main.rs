//! CLI frontend for the DandD character creator.

mod commands;
mod gate;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dd_creation::CreationConfig;
use dd_creation::config::DEFAULT_DATA_PATH;

#[derive(Parser)]
#[command(
    name = "dandd",
    about = "DandD: roll up a character one year at a time",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a character by playing through a scenario
    Create {
        /// Scenario file to play
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Character name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Character job (prompted for when omitted)
        #[arg(short, long)]
        job: Option<String>,

        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Length of the rolling effect in milliseconds (0 disables it)
        #[arg(long, default_value = "3000")]
        delay_ms: u64,

        /// Roll without waiting for Enter
        #[arg(short, long)]
        yes: bool,

        /// Print the finished character as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a scenario file and summarize its questions
    Check {
        /// Scenario file to validate
        #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create {
            data,
            name,
            job,
            seed,
            delay_ms,
            yes,
            json,
        } => {
            let mut config = CreationConfig::default()
                .with_data_path(data)
                .with_roll_delay(Duration::from_millis(delay_ms));
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            commands::create::run(&config, name, job, yes, json)
        }
        Commands::Check { data } => commands::check::run(&data),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
