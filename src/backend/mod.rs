pub mod http;

use crate::{error::Result, models::GenerationRequest};
use async_trait::async_trait;
use image::RgbImage;

pub use http::HttpBackend;

/// Narrow seam to the external pretrained-model capability.
///
/// Implementations must yield at least `request.image_count` bitmaps of
/// `request.width x request.height`, in generation order.
#[async_trait]
pub trait ImageBackend: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<RgbImage>>;
}
