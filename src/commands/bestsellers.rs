//! Bestsellers command implementation.

use crate::amazon::{AmazonClient, BestsellerSource, Parser};
use crate::format;
use anyhow::{Context, Result};
use tracing::info;

/// Fetches the bestsellers listing and returns the rendered output.
pub async fn execute() -> Result<String> {
    let client = AmazonClient::new().await.context("Failed to create HTTP client")?;

    execute_with_client(&client).await
}

/// Fetches the listing with a provided client (for testing).
pub async fn execute_with_client(client: &impl BestsellerSource) -> Result<String> {
    info!("Fetching book bestsellers");

    let parser = Parser::new();

    let html = client.bestsellers().await?;
    let listings = parser.parse_bestsellers(&html)?;

    info!("Found {} listings", listings.len());

    Ok(format::format_listings(&listings))
}
