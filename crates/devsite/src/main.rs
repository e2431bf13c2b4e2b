//! devsite CLI - Documentation-site chrome renderer.
//!
//! Provides commands for:
//! - `render`: Expand the masthead and navigation fragments for a page
//! - `nav`: Dump the navigation tree as HTML or JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{NavArgs, RenderArgs};
use output::Output;

/// devsite - Documentation-site chrome renderer.
#[derive(Parser)]
#[command(name = "devsite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the masthead and navigation fragments for a page.
    Render(RenderArgs),
    /// Print the navigation tree.
    Nav(NavArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the active command
    let verbose = match &cli.command {
        Commands::Render(args) => args.verbose,
        Commands::Nav(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
