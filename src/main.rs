//! `ingress-check`: admission checks for ingress gateway entries.
//!
//! ```text
//! entry file → normalize → validate → report
//!                                  └→ contains <service> → true/false
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use ingress_gateway_entry::config::loader::{load_config, load_entry_unchecked};
use ingress_gateway_entry::config::watcher::EntryWatcher;
use ingress_gateway_entry::config::{CheckerConfig, ReportMode};
use ingress_gateway_entry::observability::logging::init_logging;
use ingress_gateway_entry::{ServiceId, TenancyScope};

#[derive(Parser)]
#[command(name = "ingress-check")]
#[command(about = "Normalize, validate and query ingress gateway config entries", long_about = None)]
struct Cli {
    /// Checker settings (TOML). Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more entry files
    Validate {
        #[arg(required = true)]
        entries: Vec<PathBuf>,
    },
    /// Print the canonical form of an entry as JSON
    Normalize { entry: PathBuf },
    /// Check whether an entry routes a service
    Contains {
        entry: PathBuf,
        service: String,
        #[arg(long)]
        namespace: Option<String>,
        #[arg(long)]
        partition: Option<String>,
    },
    /// Re-validate an entry every time the file changes
    Watch { entry: PathBuf },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        None => CheckerConfig::default(),
    };
    init_logging(&config.logging);

    match run(cli.command, &config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(command: Commands, config: &CheckerConfig) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Commands::Validate { entries } => {
            let mut all_valid = true;
            for path in &entries {
                all_valid &= validate_file(path, config.validation.report)?;
            }
            Ok(all_valid)
        }
        Commands::Normalize { entry } => {
            let entry = load_entry_unchecked(&entry)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
            Ok(true)
        }
        Commands::Contains {
            entry,
            service,
            namespace,
            partition,
        } => {
            let entry = load_entry_unchecked(&entry)?;
            let tenancy = TenancyScope { namespace, partition };
            let found = entry.contains_service(&ServiceId::new(service, Some(&tenancy)));
            println!("{}", found);
            Ok(found)
        }
        Commands::Watch { entry } => {
            let (watcher, mut updates) = EntryWatcher::new(&entry, &config.watch);
            let _handle = watcher.run()?;
            loop {
                tokio::select! {
                    Some(accepted) = updates.recv() => {
                        println!("{}: ok ({} listeners)", entry.display(), accepted.listeners.len());
                    }
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Stopping entry watcher");
                        return Ok(true);
                    }
                }
            }
        }
    }
}

fn validate_file(path: &Path, report: ReportMode) -> Result<bool, Box<dyn std::error::Error>> {
    let entry = load_entry_unchecked(path)?;
    let errors: Vec<_> = match report {
        ReportMode::FirstError => entry.validate().err().into_iter().collect(),
        ReportMode::AllErrors => entry.validate_all(),
    };

    if errors.is_empty() {
        println!("{}: ok", path.display());
        return Ok(true);
    }
    for err in &errors {
        println!("{}: {}", path.display(), err);
    }
    Ok(false)
}
