//! Wonderland CLI - operational tools for the storefront.
//!
//! # Usage
//!
//! ```bash
//! # Seed the Wonderland API with sample products (idempotent)
//! wonderland-cli seed
//!
//! # Check the API is up
//! wonderland-cli health
//!
//! # List the catalog
//! wonderland-cli products
//! ```
//!
//! All commands read `WONDERLAND_API_URL` from the environment (or `.env`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wonderland-cli")]
#[command(author, version, about = "Wonderland Stores CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the API with sample products
    Seed,
    /// Check API health
    Health,
    /// List the product catalog
    Products,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run().await?,
        Commands::Health => commands::health::run().await?,
        Commands::Products => commands::products::run().await?,
    }
    Ok(())
}
