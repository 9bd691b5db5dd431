//! HTTP client for fetching the bestsellers listing page.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};
use wreq::Client;

/// The bestsellers listing URL. Fixed; this tool fetches nothing else.
pub const BESTSELLERS_URL: &str = "http://www.amazon.com/gp/bestsellers/books/ref=sv_b_2";

/// Listing path, appended to a custom base URL in tests.
const BESTSELLERS_PATH: &str = "/gp/bestsellers/books/ref=sv_b_2";

const USER_AGENT: &str = "Resistance is futile";

/// Trait for fetching the bestsellers page - enables mocking for tests.
#[async_trait]
pub trait BestsellerSource: Send + Sync {
    /// Fetches the bestsellers listing page and returns the HTML response.
    async fn bestsellers(&self) -> Result<String>;
}

/// Amazon HTTP client.
pub struct AmazonClient {
    client: Client,
    base_url: Option<String>,
}

impl AmazonClient {
    /// Creates a new Amazon client.
    pub async fn new() -> Result<Self> {
        Self::with_base_url(None).await
    }

    /// Creates a new Amazon client with an optional custom base URL (for testing).
    pub async fn with_base_url(base_url: Option<String>) -> Result<Self> {
        let client = Client::builder().cookie_store(true).gzip(true).brotli(true).build()?;

        Ok(Self { client, base_url })
    }

    /// Returns the listing URL (custom base for testing, or the fixed URL).
    fn url(&self) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base, BESTSELLERS_PATH),
            None => BESTSELLERS_URL.to_string(),
        }
    }

    /// Performs a GET request against the listing URL.
    async fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }
}

#[async_trait]
impl BestsellerSource for AmazonClient {
    async fn bestsellers(&self) -> Result<String> {
        info!("Fetching bestsellers listing");
        self.get(&self.url()).await
    }
}
