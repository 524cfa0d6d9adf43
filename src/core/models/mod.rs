mod catalog_record;
mod display_card;
mod search_query;
mod search_state;
mod user_settings;

pub use catalog_record::{CatalogOutcome, CatalogRecord, CatalogResponse};
pub use display_card::{CardImage, DisplayCard};
pub use search_query::{CatalogRequest, SearchQuery};
pub use search_state::{arrange_in_rows, BannerKind, SearchState, StatusBanner};
pub use user_settings::{ThemeMode, UserSettings};
