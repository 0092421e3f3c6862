use image::RgbImage;
use serde::{Deserialize, Serialize};

/// Composed grid image plus the seed that actually drove generation.
///
/// The seed rides alongside the image so the caller can echo it back for
/// reproducible re-runs, whether it was user-supplied or randomly drawn.
#[derive(Debug, Clone)]
pub struct InferenceOutcome {
    pub image: RgbImage,
    pub seed: u32,
}

/// Wire payload returned by the HTTP generation backend.
#[derive(Debug, Serialize, Deserialize)]
pub struct BackendImageResponse {
    /// Base64-encoded PNG images.
    pub images: Vec<String>,
}
