use std::sync::Arc;

use futures::future::BoxFuture;
use iced::{Element, Task, Theme};

use crate::core::interfaces::adapters::{ArtworkCatalog, ArtworkImageFetcher};
use crate::core::models::{
    CardImage, CatalogOutcome, DisplayCard, SearchQuery, SearchState, UserSettings,
};
use crate::presentation::app_theme;
use crate::presentation::{SearchView, SearchViewMessage};

pub struct AppOrchestrator {
    catalog: Arc<dyn ArtworkCatalog>,
    image_fetcher: Arc<dyn ArtworkImageFetcher>,
    settings: UserSettings,
    search_view: SearchView,
    search_state: SearchState,
    search_generation: u64,
}

#[derive(Clone)]
pub enum OrchestratorMessage {
    SearchView(SearchViewMessage),
    CatalogLoaded(u64, Result<CatalogOutcome, String>),
    CardImageLoaded(u64, usize, CardImage),
    SpinnerTick,
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::SearchView(msg) => write!(f, "SearchView({:?})", msg),
            OrchestratorMessage::CatalogLoaded(generation, Ok(CatalogOutcome::Records(records))) => {
                write!(f, "CatalogLoaded({}, {} records)", generation, records.len())
            }
            OrchestratorMessage::CatalogLoaded(generation, Ok(CatalogOutcome::Empty)) => {
                write!(f, "CatalogLoaded({}, empty)", generation)
            }
            OrchestratorMessage::CatalogLoaded(generation, Err(e)) => {
                write!(f, "CatalogLoaded({}, error: {})", generation, e)
            }
            OrchestratorMessage::CardImageLoaded(generation, index, image) => {
                write!(f, "CardImageLoaded({}, {}, {:?})", generation, index, image)
            }
            OrchestratorMessage::SpinnerTick => write!(f, "SpinnerTick"),
        }
    }
}

/// Never fails: any fetch or decode error becomes a placeholder for this card.
pub async fn load_card_image(fetcher: &dyn ArtworkImageFetcher, image_url: &str) -> CardImage {
    match fetcher.fetch_image(image_url).await {
        Ok(handle) => CardImage::Available(handle),
        Err(e) => {
            log::warn!("[ORCHESTRATOR] Image fetch failed for {}: {:#}", image_url, e);
            CardImage::FetchFailed(format!("{:#}", e))
        }
    }
}

impl AppOrchestrator {
    pub fn build(
        catalog: Arc<dyn ArtworkCatalog>,
        image_fetcher: Arc<dyn ArtworkImageFetcher>,
        settings: UserSettings,
    ) -> Self {
        Self {
            catalog,
            image_fetcher,
            settings,
            search_view: SearchView::build(),
            search_state: SearchState::default(),
            search_generation: 0,
        }
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search_state
    }

    pub fn is_loading(&self) -> bool {
        self.search_state.is_loading()
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        if !matches!(message, OrchestratorMessage::SpinnerTick) {
            log::info!("[ORCHESTRATOR] Received message: {:?}", message);
        }

        match message {
            OrchestratorMessage::SearchView(view_msg) => {
                return self.handle_search_view_message(view_msg);
            }
            OrchestratorMessage::CatalogLoaded(generation, result) => {
                return self.handle_catalog_loaded(generation, result);
            }
            OrchestratorMessage::CardImageLoaded(generation, index, image) => {
                self.handle_card_image_loaded(generation, index, image);
            }
            OrchestratorMessage::SpinnerTick => {
                self.search_view.advance_spinner();
            }
        }

        Task::none()
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let theme = self.theme();
        self.search_view
            .render_ui(self.search_state(), &theme)
            .map(OrchestratorMessage::SearchView)
    }

    fn handle_search_view_message(
        &mut self,
        view_msg: SearchViewMessage,
    ) -> Task<OrchestratorMessage> {
        self.search_view.update(&view_msg);

        match view_msg {
            SearchViewMessage::SearchPressed | SearchViewMessage::ExampleTermSelected(_) => {
                let raw_query = self.search_view.query_input().to_string();
                self.start_search(&raw_query)
            }
            SearchViewMessage::OpenMuseumLink(url) => {
                log::info!("[ORCHESTRATOR] Opening museum page: {}", url);
                if let Err(e) = open::that(&url) {
                    log::error!("[ORCHESTRATOR] Failed to open {}: {}", url, e);
                }
                Task::none()
            }
            SearchViewMessage::QueryChanged(_) => Task::none(),
        }
    }

    fn start_search(&mut self, raw_query: &str) -> Task<OrchestratorMessage> {
        match self.begin_search(raw_query) {
            Some(search) => Task::future(search),
            None => Task::none(),
        }
    }

    /// Moves to `Loading` and returns the catalog call, or `None` for an empty query.
    fn begin_search(
        &mut self,
        raw_query: &str,
    ) -> Option<BoxFuture<'static, OrchestratorMessage>> {
        self.search_generation += 1;

        let Some(query) = SearchQuery::parse(raw_query) else {
            log::info!("[ORCHESTRATOR] Search requested with an empty query");
            self.search_state = SearchState::EmptyQueryError;
            return None;
        };

        log::info!(
            "[ORCHESTRATOR] Starting search #{} for \"{}\"",
            self.search_generation,
            query
        );

        self.search_state = SearchState::Loading {
            query: query.clone(),
        };

        let generation = self.search_generation;
        let catalog = Arc::clone(&self.catalog);

        Some(Box::pin(async move {
            let result = catalog.search(&query).await.map_err(|e| {
                log::error!("[ORCHESTRATOR] Catalog search failed: {:#}", e);
                format!("{:#}", e)
            });
            OrchestratorMessage::CatalogLoaded(generation, result)
        }))
    }

    fn handle_catalog_loaded(
        &mut self,
        generation: u64,
        result: Result<CatalogOutcome, String>,
    ) -> Task<OrchestratorMessage> {
        if generation != self.search_generation {
            log::debug!(
                "[ORCHESTRATOR] Dropping stale catalog result #{} (current #{})",
                generation,
                self.search_generation
            );
            return Task::none();
        }

        let Some(query) = self.search_state.query().cloned() else {
            log::warn!("[ORCHESTRATOR] Catalog result arrived outside of a search");
            return Task::none();
        };

        match result {
            Ok(CatalogOutcome::Records(records)) => {
                let cards: Vec<DisplayCard> = records.iter().map(DisplayCard::from_record).collect();
                log::info!("[ORCHESTRATOR] Showing {} cards for \"{}\"", cards.len(), query);

                let image_tasks = self.spawn_image_fetches(generation, &cards);
                self.search_state = SearchState::Results { query, cards };
                image_tasks
            }
            Ok(CatalogOutcome::Empty) => {
                log::info!("[ORCHESTRATOR] No artworks found for \"{}\"", query);
                self.search_state = SearchState::Empty { query };
                Task::none()
            }
            Err(message) => {
                self.search_state = SearchState::Error { message };
                Task::none()
            }
        }
    }

    fn spawn_image_fetches(
        &self,
        generation: u64,
        cards: &[DisplayCard],
    ) -> Task<OrchestratorMessage> {
        let fetches = self.image_fetches(generation, cards);

        log::debug!("[ORCHESTRATOR] Spawning {} image fetches", fetches.len());
        Task::batch(fetches.into_iter().map(Task::future))
    }

    /// One independent fetch per card that has an image URL.
    fn image_fetches(
        &self,
        generation: u64,
        cards: &[DisplayCard],
    ) -> Vec<BoxFuture<'static, OrchestratorMessage>> {
        cards
            .iter()
            .enumerate()
            .filter_map(|(index, card)| {
                let image_url = card.image_url.clone()?;
                let fetcher = Arc::clone(&self.image_fetcher);

                let fetch: BoxFuture<'static, OrchestratorMessage> = Box::pin(async move {
                    let image = load_card_image(fetcher.as_ref(), &image_url).await;
                    OrchestratorMessage::CardImageLoaded(generation, index, image)
                });
                Some(fetch)
            })
            .collect()
    }

    fn handle_card_image_loaded(&mut self, generation: u64, index: usize, image: CardImage) {
        if generation != self.search_generation {
            log::debug!("[ORCHESTRATOR] Dropping stale image for card {}", index);
            return;
        }

        match self
            .search_state
            .cards_mut()
            .and_then(|cards| cards.get_mut(index))
        {
            Some(card) => card.image = image,
            None => log::warn!("[ORCHESTRATOR] Image arrived for unknown card {}", index),
        }
    }
}
