//! riflecraft - command-line front-end
//!
//! Loads a catalog and serves one request, printing the JSON reply on
//! stdout. Logs go to stderr.

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use riflecraft::catalog::InMemoryCatalog;
use riflecraft::config::CraftConfig;
use riflecraft::error::Result;
use riflecraft::service::{CraftingService, Outcome, Reply, Route};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "riflecraft", about = "Craft rifles from materials and augments")]
struct Cli {
    /// Catalog JSON file (overrides RIFLECRAFT_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for elemental rolls (overrides RIFLECRAFT_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every material
    Materials,
    /// List every augment
    Augments,
    /// Craft a rifle from a request document
    Craft {
        /// Request JSON file; reads stdin when omitted or "-"
        #[arg(long)]
        request: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = CraftConfig::from_env();
    if let Some(path) = cli.catalog.clone() {
        config = config.with_catalog_path(path);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    match run(&cli.command, &config) {
        Ok(reply) => {
            println!("{}", reply.body);
            match reply.outcome {
                Outcome::Success => ExitCode::SUCCESS,
                Outcome::ClientError => ExitCode::from(1),
                Outcome::ServerError => ExitCode::from(2),
            }
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::from(2)
        }
    }
}

fn run(command: &Command, config: &CraftConfig) -> Result<Reply> {
    let catalog = InMemoryCatalog::load(&config.catalog_path)?;
    let service = CraftingService::new(catalog);

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let reply = match command {
        Command::Materials => service.handle(Route::Materials, None, &mut rng),
        Command::Augments => service.handle(Route::Augments, None, &mut rng),
        Command::Craft { request } => {
            let body = read_request(request.as_deref())?;
            service.handle(Route::Craft, Some(&body), &mut rng)
        }
    };
    Ok(reply)
}

fn read_request(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => Ok(std::fs::read_to_string(p)?),
        _ => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}
