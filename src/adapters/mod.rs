mod harvard_catalog_client;
mod http_image_fetcher;

pub use harvard_catalog_client::HarvardCatalogClient;
pub use http_image_fetcher::HttpImageFetcher;
