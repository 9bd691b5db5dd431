//! amz-bestsellers - Amazon book bestsellers listing CLI

use amz_bestsellers::commands::bestsellers;
use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-bestsellers",
    version,
    about = "Prints the current Amazon book bestsellers",
    long_about = "Fetches the Amazon book bestsellers listing page and prints each entry's title, author, price, and link."
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let output = bestsellers::execute().await?;
    println!("{}", output);

    Ok(())
}
