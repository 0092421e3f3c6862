use crate::{
    backend::{HttpBackend, ImageBackend},
    compositor,
    config::BackendConfig,
    error::Result,
    models::{GenerationRequest, InferenceInputs, InferenceOutcome},
    resolver, styles,
};
use rand::Rng;
use std::sync::Arc;

/// Facade joining the resolver, the generation backend, and the compositor.
///
/// One call to [`GridPipeline::infer`] is one complete interaction: either a
/// composed grid image plus the effective seed comes back, or an error does.
/// Nothing is cached between calls.
#[derive(Clone)]
pub struct GridPipeline {
    backend: Arc<dyn ImageBackend>,
}

impl GridPipeline {
    /// Build a pipeline over the HTTP generation backend.
    pub fn new(config: BackendConfig) -> Result<Self> {
        Ok(Self {
            backend: Arc::new(HttpBackend::new(config)?),
        })
    }

    /// Build a pipeline over any generation backend.
    pub fn with_backend(backend: Arc<dyn ImageBackend>) -> Self {
        Self { backend }
    }

    /// Resolve, generate, and compose one request.
    pub async fn infer(&self, inputs: InferenceInputs) -> Result<InferenceOutcome> {
        let (request, seed) = resolver::resolve(&inputs)?;
        self.run(&inputs.style, request, seed).await
    }

    /// Same as [`GridPipeline::infer`] with an injected random source for
    /// the seed draw.
    pub async fn infer_with_rng<R: Rng>(
        &self,
        inputs: InferenceInputs,
        rng: &mut R,
    ) -> Result<InferenceOutcome> {
        let (request, seed) = resolver::resolve_with_rng(&inputs, rng)?;
        self.run(&inputs.style, request, seed).await
    }

    async fn run(
        &self,
        style: &str,
        request: GenerationRequest,
        seed: u32,
    ) -> Result<InferenceOutcome> {
        log::info!(
            "🎨 Generating {} image(s), style '{}', seed {}",
            request.image_count,
            style,
            seed
        );

        let _timer = crate::logger::timer("inference");
        let images = self.backend.generate(&request).await?;
        let image = compositor::compose_grid(&images, request.width, request.height, request.grid)?;

        log::info!(
            "🖼️  Composed {}x{} grid image",
            image.width(),
            image.height()
        );

        Ok(InferenceOutcome { image, seed })
    }

    /// Names of the fixed style presets, in catalog order.
    pub fn styles() -> Vec<&'static str> {
        styles::style_names()
    }

    /// Names of the fixed grid shapes, in catalog order.
    pub fn grid_sizes() -> Vec<&'static str> {
        styles::grid_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use async_trait::async_trait;
    use image::{Rgb, RgbImage};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Deterministic stand-in for the model backend: tile `i` is a solid
    /// image whose red channel is `i`.
    struct FakeBackend {
        calls: AtomicUsize,
        shortfall: u32,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                shortfall: 0,
            }
        }

        fn short_by(shortfall: u32) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                shortfall,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageBackend for FakeBackend {
        async fn generate(&self, request: &GenerationRequest) -> Result<Vec<RgbImage>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let count = request.image_count.saturating_sub(self.shortfall);
            Ok((0..count)
                .map(|i| {
                    RgbImage::from_pixel(request.width, request.height, Rgb([i as u8, 0, 0]))
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn test_infer_composes_the_requested_grid() {
        let backend = Arc::new(FakeBackend::new());
        let pipeline = GridPipeline::with_backend(backend.clone());

        let inputs = InferenceInputs::new("a cat holding a sign")
            .with_grid_size("2x3")
            .with_dimensions(512, 512)
            .with_seed(7);

        let outcome = pipeline.infer(inputs).await.unwrap();

        assert_eq!(outcome.seed, 7);
        assert_eq!(outcome.image.dimensions(), (1024, 1536));
        assert_eq!(backend.call_count(), 1);
        // Tiles land row-major: tile 4 sits at column 0 of row 2.
        assert_eq!(outcome.image.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(outcome.image.get_pixel(512, 0), &Rgb([1, 0, 0]));
        assert_eq!(outcome.image.get_pixel(0, 1024), &Rgb([4, 0, 0]));
    }

    #[tokio::test]
    async fn test_unknown_style_never_reaches_the_backend() {
        let backend = Arc::new(FakeBackend::new());
        let pipeline = GridPipeline::with_backend(backend.clone());

        let err = pipeline
            .infer(InferenceInputs::new("x").with_style("Vaporwave"))
            .await
            .unwrap_err();

        assert!(matches!(err, GridError::UnknownStyle(_)));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_short_backend_batch_is_fatal() {
        let pipeline = GridPipeline::with_backend(Arc::new(FakeBackend::short_by(1)));

        let err = pipeline
            .infer(InferenceInputs::new("x").with_grid_size("2x2"))
            .await
            .unwrap_err();

        assert!(matches!(err, GridError::InsufficientImages(_)));
    }

    struct FailingBackend;

    #[async_trait]
    impl ImageBackend for FailingBackend {
        async fn generate(&self, _request: &GenerationRequest) -> Result<Vec<RgbImage>> {
            Err(GridError::BackendError("CUDA out of memory".to_string()))
        }
    }

    #[tokio::test]
    async fn test_backend_failure_propagates_unchanged() {
        let pipeline = GridPipeline::with_backend(Arc::new(FailingBackend));

        let err = pipeline
            .infer(InferenceInputs::new("x"))
            .await
            .unwrap_err();

        match err {
            GridError::BackendError(msg) => assert_eq!(msg, "CUDA out of memory"),
            other => panic!("expected a backend error, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_echoed_seed_reproduces_the_outcome() {
        let pipeline = GridPipeline::with_backend(Arc::new(FakeBackend::new()));

        let first = pipeline
            .infer(InferenceInputs::new("same prompt").with_seed(1234))
            .await
            .unwrap();
        let second = pipeline
            .infer(InferenceInputs::new("same prompt").with_seed(first.seed))
            .await
            .unwrap();

        assert_eq!(first.seed, second.seed);
        assert_eq!(first.image.as_raw(), second.image.as_raw());
    }

    #[tokio::test]
    async fn test_randomized_inference_echoes_the_drawn_seed() {
        let pipeline = GridPipeline::with_backend(Arc::new(FakeBackend::new()));

        let mut rng = StdRng::seed_from_u64(5);
        let first = pipeline
            .infer_with_rng(InferenceInputs::new("x").with_random_seed(), &mut rng)
            .await
            .unwrap();

        let mut replay = StdRng::seed_from_u64(5);
        let second = pipeline
            .infer_with_rng(InferenceInputs::new("x").with_random_seed(), &mut replay)
            .await
            .unwrap();

        assert_eq!(first.seed, second.seed);
    }

    #[test]
    fn test_catalog_listings_match_the_tables() {
        assert_eq!(
            GridPipeline::styles(),
            vec!["3840 x 2160", "2560 x 1440", "HD+", "Style Zero"]
        );
        assert_eq!(
            GridPipeline::grid_sizes(),
            vec!["2x1", "1x2", "2x2", "2x3", "3x2", "1x1"]
        );
    }
}
