use crate::core::models::{DisplayCard, SearchQuery};
use crate::global_constants;

#[derive(Debug, Clone, Default)]
pub enum SearchState {
    #[default]
    NoQuery,
    EmptyQueryError,
    Loading { query: SearchQuery },
    Results {
        query: SearchQuery,
        cards: Vec<DisplayCard>,
    },
    Empty { query: SearchQuery },
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: BannerKind,
    pub message: String,
}

impl StatusBanner {
    fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl SearchState {
    /// `None` while loading; the view draws a spinner instead.
    pub fn banner(&self) -> Option<StatusBanner> {
        match self {
            SearchState::NoQuery => Some(StatusBanner::new(
                BannerKind::Info,
                global_constants::USER_MESSAGE_NO_QUERY,
            )),
            SearchState::EmptyQueryError => Some(StatusBanner::new(
                BannerKind::Info,
                global_constants::USER_MESSAGE_EMPTY_QUERY,
            )),
            SearchState::Loading { .. } => None,
            SearchState::Results { cards, .. } => Some(StatusBanner::new(
                BannerKind::Success,
                format!("✨ Found {} artworks", cards.len()),
            )),
            SearchState::Empty { query } => Some(StatusBanner::new(
                BannerKind::Warning,
                format!(
                    "⚠️ No artworks found for \"{}\". Try a different search term.",
                    query
                ),
            )),
            SearchState::Error { message } => Some(StatusBanner::new(
                BannerKind::Error,
                format!("❌ Error: {}", message),
            )),
        }
    }

    pub fn cards(&self) -> &[DisplayCard] {
        match self {
            SearchState::Results { cards, .. } => cards,
            _ => &[],
        }
    }

    pub fn cards_mut(&mut self) -> Option<&mut Vec<DisplayCard>> {
        match self {
            SearchState::Results { cards, .. } => Some(cards),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    pub fn query(&self) -> Option<&SearchQuery> {
        match self {
            SearchState::Loading { query }
            | SearchState::Results { query, .. }
            | SearchState::Empty { query } => Some(query),
            SearchState::NoQuery | SearchState::EmptyQueryError | SearchState::Error { .. } => {
                None
            }
        }
    }
}

/// Row `i / columns`, column `i % columns`; only the last row may be short.
pub fn arrange_in_rows<T>(items: &[T], columns: usize) -> Vec<&[T]> {
    if columns == 0 {
        return Vec::new();
    }
    items.chunks(columns).collect()
}
