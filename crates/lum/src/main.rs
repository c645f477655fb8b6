//! lum CLI - Wiki navigation.
//!
//! Provides commands for:
//! - `nav`: Print the navigation built for a document as JSON
//! - `check`: Verify that the document root can be listed

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs};
use output::Output;

/// lum - Wiki navigation.
#[derive(Parser)]
#[command(name = "lum", version, about)]
struct Cli {
    /// Enable verbose output (log every directory scan).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print menu, side menu and breadcrumb for a request path.
    Nav(NavArgs),
    /// Check that the document root can be scanned.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG for lum crates, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("lum=debug,lum_nav=debug,lum_config=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Nav(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
