//! Storefront - a product card in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use storefront::Overrides;
use storefront_core::prelude::*;

/// Storefront - a product card in the terminal
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse a product, fill a cart and leave reviews", long_about = None)]
struct Args {
    /// Directory holding .storefront/config.toml (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Treat the shopper as premium (free shipping)
    #[arg(long)]
    premium: bool,

    /// Run in headless mode (stdin commands, JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let overrides = Overrides {
        premium: args.premium,
    };

    if args.headless {
        storefront::run_headless(&base_path, overrides).await
    } else {
        storefront::run(&base_path, overrides).await
    }
}
