pub mod app_theme;
mod artwork_card_view;
mod search_view;

pub use search_view::{SearchView, SearchViewMessage};
