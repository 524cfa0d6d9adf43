use anyhow::Result;
use async_trait::async_trait;
use iced::widget::image;

#[async_trait]
pub trait ArtworkImageFetcher: Send + Sync {
    async fn fetch_image(&self, image_url: &str) -> Result<image::Handle>;
}
