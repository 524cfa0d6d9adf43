mod artwork_catalog;
mod artwork_image_fetcher;

pub use artwork_catalog::ArtworkCatalog;
pub use artwork_image_fetcher::ArtworkImageFetcher;
