//! PromptGrid turns a text prompt, a style preset, and a grid size into one
//! composed image plus the seed that produced it, delegating actual image
//! synthesis to an external pretrained diffusion backend.
//!
//! The two native pieces are the resolver (raw UI fields to a fully-resolved
//! generation request) and the compositor (generated tiles to one row-major
//! grid canvas). [`GridPipeline`] joins them around an [`ImageBackend`].
//!
//! ```rust,ignore
//! use promptgrid::{BackendConfig, GridPipeline, InferenceInputs};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     promptgrid::logger::init()?;
//!
//!     let config = BackendConfig::new().with_endpoint("http://127.0.0.1:7860/generate");
//!     let pipeline = GridPipeline::new(config)?;
//!
//!     let inputs = InferenceInputs::new("a tiny astronaut hatching from an egg")
//!         .with_style("HD+")
//!         .with_grid_size("2x2")
//!         .with_random_seed();
//!
//!     let outcome = pipeline.infer(inputs).await?;
//!     println!("seed used: {}", outcome.seed);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod compositor;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod pipeline;
pub mod resolver;
#[cfg(feature = "server")]
pub mod server;
pub mod styles;

pub use backend::{HttpBackend, ImageBackend};
pub use config::{BackendConfig, Config, ServerConfig};
pub use error::{GridError, Result};
pub use models::{BackendImageResponse, GenerationRequest, InferenceInputs, InferenceOutcome};
pub use pipeline::GridPipeline;
pub use resolver::MAX_SEED;
pub use styles::{GridShape, StylePreset};
