use super::ImageBackend;
use crate::{
    config::BackendConfig,
    error::{GridError, Result},
    models::{BackendImageResponse, GenerationRequest},
};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::RgbImage;
use serde_json::json;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// HTTP client for a diffusion inference endpoint.
///
/// Posts one JSON generation request and expects the full batch of
/// base64-encoded PNGs back in a single response body.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .ok_or_else(|| GridError::ConfigError("backend endpoint required".into()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(
                config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .build()
            .map_err(|e| GridError::ClientError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl ImageBackend for HttpBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<RgbImage>> {
        let payload = build_payload(request);

        log::info!(
            "Requesting {} image(s) at {}x{} from backend",
            request.image_count,
            request.width,
            request.height
        );
        log::debug!("Generation payload: {}", payload);

        let mut http_request = self.client.post(&self.endpoint).json(&payload);
        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| GridError::BackendError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GridError::BackendError(format!(
                "backend returned {}: {}",
                status, body
            )));
        }

        let batch: BackendImageResponse = response
            .json()
            .await
            .map_err(|e| GridError::ResponseError(e.to_string()))?;

        if batch.images.is_empty() {
            return Err(GridError::ResponseError("No images generated".into()));
        }

        batch.images.iter().map(|data| decode_image(data)).collect()
    }
}

fn build_payload(request: &GenerationRequest) -> serde_json::Value {
    json!({
        "prompt": request.prompt,
        "negative_prompt": request.negative_prompt,
        "width": request.width,
        "height": request.height,
        "guidance_scale": request.guidance_scale,
        "steps": request.steps,
        "seed": request.seed,
        "num_images": request.image_count,
    })
}

fn decode_image(data: &str) -> Result<RgbImage> {
    let bytes = BASE64
        .decode(data)
        .map_err(|e| GridError::ResponseError(e.to_string()))?;
    let decoded =
        image::load_from_memory(&bytes).map_err(|e| GridError::ResponseError(e.to_string()))?;
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::GridShape;

    fn request() -> GenerationRequest {
        GenerationRequest {
            prompt: "hyper-realistic 2K image of a fox".to_string(),
            negative_prompt: "blurry".to_string(),
            seed: 42,
            width: 1024,
            height: 1024,
            guidance_scale: 7.5,
            steps: 10,
            image_count: 4,
            grid: GridShape::new(2, 2),
        }
    }

    #[test]
    fn test_payload_uses_the_backend_field_names() {
        let payload = build_payload(&request());

        assert_eq!(payload["prompt"], "hyper-realistic 2K image of a fox");
        assert_eq!(payload["negative_prompt"], "blurry");
        assert_eq!(payload["width"], 1024);
        assert_eq!(payload["height"], 1024);
        assert_eq!(payload["guidance_scale"], 7.5);
        assert_eq!(payload["steps"], 10);
        assert_eq!(payload["seed"], 42);
        assert_eq!(payload["num_images"], 4);
    }

    #[test]
    fn test_decode_image_round_trips_a_png() {
        let tile = RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3]));
        let png = crate::compositor::encode_png(&tile).unwrap();
        let decoded = decode_image(&BASE64.encode(png)).unwrap();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgb([1, 2, 3]));
    }

    #[test]
    fn test_decode_image_rejects_garbage() {
        let err = decode_image("not base64 at all!").unwrap_err();
        assert!(matches!(err, GridError::ResponseError(_)));
    }

    #[test]
    fn test_backend_requires_an_endpoint() {
        let err = HttpBackend::new(BackendConfig::new()).unwrap_err();
        assert!(matches!(err, GridError::ConfigError(_)));
    }
}
