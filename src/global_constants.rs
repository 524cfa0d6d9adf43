#![allow(dead_code)]

pub const APPLICATION_TITLE: &str = "Artwork Search";

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.harvardartmuseums.org/object";
pub const API_KEY_ENV_VAR: &str = "HARVARD_ART_MUSEUMS_API_KEY";

pub const CATALOG_PAGE_SIZE: usize = 12;
pub const CATALOG_REQUIRE_IMAGE: &str = "1";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 20;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

pub const THUMBNAIL_MAX_EDGE: u32 = 640;

pub const GRID_COLUMNS: usize = 3;
pub const MEDIUM_MAX_CHARS: usize = 60;
pub const ELLIPSIS_MARKER: &str = "...";

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_ARTIST: &str = "Unknown Artist";

pub const EXAMPLE_SEARCH_TERMS: [&str; 6] = [
    "painting",
    "sculpture",
    "Rembrandt",
    "Van Gogh",
    "portrait",
    "landscape",
];

pub const HEADER_TITLE: &str = "🎨 Artwork Search";
pub const HEADER_SUBTITLE: &str = "Explore artworks from Harvard Art Museums";
pub const SEARCH_PLACEHOLDER: &str = "e.g., painting, portrait, landscape, Monet...";
pub const SEARCH_BUTTON_LABEL: &str = "🔍 Search";
pub const MUSEUM_LINK_LABEL: &str = "🔗 View at Museum";

pub const USER_MESSAGE_NO_QUERY: &str =
    "👆 Enter a search term above and click Search to discover amazing artworks";
pub const USER_MESSAGE_TRY_SEARCHING: &str = "Try searching for:";
pub const USER_MESSAGE_EMPTY_QUERY: &str = "💡 Please enter a search term";
pub const USER_MESSAGE_SEARCHING: &str = "Searching artworks...";

pub const PLACEHOLDER_IMAGE_LOADING: &str = "Loading image...";
pub const PLACEHOLDER_NO_IMAGE: &str = "📷 No image";
pub const PLACEHOLDER_IMAGE_UNAVAILABLE: &str = "📷 Image not available";

pub const ARTIST_GLYPH: &str = "👤";
pub const DATE_GLYPH: &str = "📅";

pub const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
pub const SPINNER_TICK_MILLIS: u64 = 80;

pub const SETTINGS_DIR_NAME: &str = "artwork-search";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
