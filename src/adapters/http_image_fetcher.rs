use anyhow::{Context, Result};
use async_trait::async_trait;
use iced::widget::image;
use std::time::Duration;

use crate::core::interfaces::adapters::ArtworkImageFetcher;
use crate::core::models::UserSettings;
use crate::global_constants;

pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn build(settings: &UserSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(global_constants::CONNECT_TIMEOUT_SECS))
            .timeout(settings.image_timeout())
            .build()
            .context("Failed to build image HTTP client")?;

        Ok(Self { client })
    }

    async fn download_image_bytes(&self, image_url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(image_url)
            .send()
            .await
            .context("Failed to download image")?
            .error_for_status()
            .context("Image host returned an error status")?;

        let bytes = response
            .bytes()
            .await
            .context("Failed to read image body")?;

        Ok(bytes.to_vec())
    }
}

/// Decodes any format the `image` crate understands, downscaled so neither
/// edge exceeds `THUMBNAIL_MAX_EDGE`.
pub fn decode_image(bytes: &[u8]) -> Result<image::Handle> {
    let decoded = ::image::load_from_memory(bytes).context("Failed to decode image")?;

    let max_edge = global_constants::THUMBNAIL_MAX_EDGE;
    let decoded = if decoded.width() > max_edge || decoded.height() > max_edge {
        decoded.thumbnail(max_edge, max_edge)
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(image::Handle::from_rgba(width, height, rgba.into_raw()))
}

#[async_trait]
impl ArtworkImageFetcher for HttpImageFetcher {
    async fn fetch_image(&self, image_url: &str) -> Result<image::Handle> {
        log::debug!("[IMAGE] Fetching {}", image_url);

        let bytes = self.download_image_bytes(image_url).await?;
        let byte_count = bytes.len();

        let handle = tokio::task::spawn_blocking(move || decode_image(&bytes))
            .await
            .context("Image decode task failed")??;

        log::debug!("[IMAGE] Decoded {} bytes from {}", byte_count, image_url);
        Ok(handle)
    }
}
