//! bookstore CLI - entry point for the books HTTP API
//!
//! The only runtime configuration is the listening address and the
//! database connection string, resolved here before anything starts:
//!
//!   bookstore serve --bind 127.0.0.1:8080
//!   DATABASE_URL=postgres://... bookstore serve

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "bookstore",
    version,
    about = "JSON-over-HTTP bookstore service backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (overridden by an explicit RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before clap reads env-backed arguments.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    }
}
