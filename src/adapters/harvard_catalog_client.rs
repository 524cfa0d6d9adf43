use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::core::interfaces::adapters::ArtworkCatalog;
use crate::core::models::{
    CatalogOutcome, CatalogRequest, CatalogResponse, SearchQuery, UserSettings,
};
use crate::global_constants;

pub struct HarvardCatalogClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HarvardCatalogClient {
    pub fn build(settings: &UserSettings) -> Result<Self> {
        log::debug!(
            "[CATALOG] Building HTTP client for {} (timeout {:?})",
            settings.catalog_base_url,
            settings.request_timeout()
        );

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(global_constants::CONNECT_TIMEOUT_SECS))
            .timeout(settings.request_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build catalog HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.catalog_base_url.clone(),
            api_key: settings.api_key.trim().to_string(),
        })
    }

    async fn fetch_response(&self, request: &CatalogRequest) -> Result<CatalogResponse> {
        let response = self
            .client
            .get(request.construct_url())
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to reach the artwork catalog")?;

        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)
            .context("Artwork catalog rejected the request")?;

        let response_text = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read the catalog response")?;

        log::debug!(
            "[CATALOG] Received {} bytes from catalog",
            response_text.len()
        );

        serde_json::from_str(&response_text).context("Failed to parse the catalog response")
    }
}

#[async_trait]
impl ArtworkCatalog for HarvardCatalogClient {
    async fn search(&self, query: &SearchQuery) -> Result<CatalogOutcome> {
        anyhow::ensure!(
            !self.api_key.is_empty(),
            "No API key configured. Set {} or add api_key to {}",
            global_constants::API_KEY_ENV_VAR,
            global_constants::SETTINGS_FILE_NAME
        );

        let request = CatalogRequest::build(&self.base_url, &self.api_key, query);
        log::info!("[CATALOG] Searching catalog for \"{}\"", query);
        log::debug!("[CATALOG] Request: {:?}", request);

        let response = self.fetch_response(&request).await?;
        let outcome = CatalogOutcome::classify(response);

        match &outcome {
            CatalogOutcome::Records(records) => {
                log::info!("[CATALOG] Catalog returned {} records", records.len());
            }
            CatalogOutcome::Empty => {
                log::info!("[CATALOG] Catalog returned no records for \"{}\"", query);
            }
        }

        Ok(outcome)
    }
}
