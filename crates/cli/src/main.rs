//! Stellar CLI - Manual smoke tools for the Stellar Burgers backend.
//!
//! # Usage
//!
//! ```bash
//! # Print the ingredient catalog
//! sb ingredients
//!
//! # Print the most recent global orders
//! sb feed --limit 5
//!
//! # Full register -> login -> order -> list -> delete pass
//! sb smoke
//! ```
//!
//! # Commands
//!
//! - `ingredients` - Fetch and print the menu
//! - `feed` - Fetch and print the global order feed
//! - `smoke` - Run the end-to-end account/order flow with a throwaway user
//!
//! The backend is selected via `STELLAR_BASE_URL` (defaults to the public
//! instance); a `.env` file is honored.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sb")]
#[command(author, version, about = "Stellar Burgers API smoke tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the ingredient catalog
    Ingredients,
    /// Fetch and print the global order feed
    Feed {
        /// Maximum number of orders to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Run the full account/order flow with a throwaway user
    Smoke,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

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
        Commands::Ingredients => commands::ingredients::list().await?,
        Commands::Feed { limit } => commands::feed::show(limit).await?,
        Commands::Smoke => commands::smoke::run().await?,
    }
    Ok(())
}
