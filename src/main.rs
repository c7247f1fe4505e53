// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cookbook::{Catalog, normalize_name, resolve};
use std::path::PathBuf;

#[cfg(feature = "server")]
use cookbook::server::{CookbookConfig, run_server};
#[cfg(feature = "server")]
use std::net::SocketAddr;
#[cfg(feature = "server")]
use tracing::info;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author, version, long_about = None)]
#[command(about = "Recipe catalog with cook-time and ingredient resolution")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    #[cfg(feature = "server")]
    Serve {
        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Address to bind to (overrides the config file)
        #[arg(short, long)]
        bind: Option<SocketAddr>,
        /// Seed file loaded at startup (overrides the config file)
        #[arg(short, long)]
        seed: Option<PathBuf>,
    },
    /// Normalize a handwritten recipe name
    Parse {
        /// Raw name
        input: String,
    },
    /// Resolve a recipe from a seed file and print its summary
    Summary {
        /// Recipe name
        name: String,
        /// Seed file with the catalog entries
        #[arg(short, long)]
        seed: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve { config, bind, seed } => {
            let file_config = match config {
                Some(path) => {
                    info!("Loading configuration from {}", path.display());
                    CookbookConfig::load(&path)?
                }
                None => CookbookConfig::default(),
            };

            let mut server_config = file_config.to_server_config()?;
            if let Some(bind) = bind {
                server_config.bind_addr = bind;
            }
            if seed.is_some() {
                server_config.seed_path = seed;
            }

            run_server(server_config).await
        }
        Commands::Parse { input } => {
            let name = normalize_name(&input)?;
            println!("{}", name);
            Ok(())
        }
        Commands::Summary { name, seed } => {
            let catalog = Catalog::from_seed_file(&seed)?;
            let summary = resolve(&catalog, &name)
                .with_context(|| format!("Failed to resolve '{}'", name))?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}
