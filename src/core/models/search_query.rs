use std::fmt;

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Returns `None` only for the empty string. Anything else is kept
    /// exactly as typed, surrounding whitespace included.
    pub fn parse(raw_text: &str) -> Option<Self> {
        if raw_text.is_empty() {
            return None;
        }

        Some(Self {
            text: raw_text.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Everything needed to issue one catalog GET.
#[derive(Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub base_url: String,
    pub api_key: String,
    pub keyword: String,
    pub require_image: bool,
    pub page_size: usize,
}

impl fmt::Debug for CatalogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogRequest")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("keyword", &self.keyword)
            .field("require_image", &self.require_image)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl CatalogRequest {
    pub fn build(base_url: &str, api_key: &str, query: &SearchQuery) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            keyword: query.text().to_string(),
            require_image: true,
            page_size: global_constants::CATALOG_PAGE_SIZE,
        }
    }

    pub fn construct_url(&self) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };

        let mut url = format!(
            "{}{}apikey={}&keyword={}",
            self.base_url,
            separator,
            urlencoding::encode(&self.api_key),
            urlencoding::encode(&self.keyword)
        );

        if self.require_image {
            url.push_str("&hasimage=");
            url.push_str(global_constants::CATALOG_REQUIRE_IMAGE);
        }

        url.push_str("&size=");
        url.push_str(&self.page_size.to_string());

        url
    }
}
