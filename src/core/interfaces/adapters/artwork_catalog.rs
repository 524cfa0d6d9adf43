use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{CatalogOutcome, SearchQuery};

#[async_trait]
pub trait ArtworkCatalog: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<CatalogOutcome>;
}
