use std::sync::Arc;

use iced::widget::image;
use iced::{Element, Subscription, Task, Theme};

use crate::adapters::{HarvardCatalogClient, HttpImageFetcher};
use crate::core::interfaces::adapters::{ArtworkCatalog, ArtworkImageFetcher};
use crate::core::models::{CatalogOutcome, SearchQuery, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants;

/// Used when an HTTP client could not be built; every call fails with the startup reason.
struct UnavailableAdapter {
    reason: String,
}

#[async_trait::async_trait]
impl ArtworkCatalog for UnavailableAdapter {
    async fn search(&self, _query: &SearchQuery) -> anyhow::Result<CatalogOutcome> {
        anyhow::bail!("Artwork catalog unavailable: {}", self.reason)
    }
}

#[async_trait::async_trait]
impl ArtworkImageFetcher for UnavailableAdapter {
    async fn fetch_image(&self, _image_url: &str) -> anyhow::Result<image::Handle> {
        anyhow::bail!("Image fetching unavailable: {}", self.reason)
    }
}

pub struct ArtworkSearchApp {
    orchestrator: AppOrchestrator,
}

impl ArtworkSearchApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("[APP] Failed to load settings: {:#}, using defaults", e);
            let mut settings = UserSettings::default();
            settings.apply_api_key_override(
                std::env::var(global_constants::API_KEY_ENV_VAR).ok(),
            );
            settings
        });

        log::debug!("[APP] Effective settings: {:?}", settings);

        let catalog: Arc<dyn ArtworkCatalog> = match HarvardCatalogClient::build(&settings) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                log::error!("[APP] Failed to initialize catalog client: {:#}", e);
                Arc::new(UnavailableAdapter {
                    reason: format!("{:#}", e),
                })
            }
        };

        let image_fetcher: Arc<dyn ArtworkImageFetcher> = match HttpImageFetcher::build(&settings)
        {
            Ok(fetcher) => Arc::new(fetcher),
            Err(e) => {
                log::error!("[APP] Failed to initialize image fetcher: {:#}", e);
                Arc::new(UnavailableAdapter {
                    reason: format!("{:#}", e),
                })
            }
        };

        let orchestrator = AppOrchestrator::build(catalog, image_fetcher, settings);

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn theme(&self) -> Theme {
        self.orchestrator.theme()
    }

    pub fn handle_subscription(&self) -> Subscription<OrchestratorMessage> {
        if !self.orchestrator.is_loading() {
            return Subscription::none();
        }

        Subscription::run(|| {
            iced::stream::channel(
                10,
                |mut output: futures::channel::mpsc::Sender<OrchestratorMessage>| async move {
                    loop {
                        tokio::time::sleep(std::time::Duration::from_millis(
                            global_constants::SPINNER_TICK_MILLIS,
                        ))
                        .await;
                        let _ = output.try_send(OrchestratorMessage::SpinnerTick);
                    }
                },
            )
        })
    }
}
