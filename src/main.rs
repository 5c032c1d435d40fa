//! apptree_fetcher CLI application
//!
//! Command-line tool for recursively downloading a remote application's
//! file tree through the platform files API.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use apptree_fetcher::cli::{handle_download, parse_flags, validate_app_name};
use apptree_fetcher::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if e.is_usage() {
            eprintln!(
                "Usage: apptree_fetcher APP_NAME [PATH] [--overwrite] [--verbose] [--i N | --instance N] [--omit SUBSTRING]"
            );
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // App name first: flags placed before it should say so, not surface
    // as a parse error on the app-name token.
    validate_app_name(&args)?;
    let flags = parse_flags(&args)?;

    init_logging(flags.verbose);
    info!("apptree_fetcher v{} starting", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir()?;
    handle_download(&cwd, &args, flags).await
}

/// Initialize logging based on the verbosity flag
fn init_logging(verbose: bool) {
    let log_level = if verbose { "info" } else { "warn" };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("apptree_fetcher={}", log_level).parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(verbose)
        .init();
}
