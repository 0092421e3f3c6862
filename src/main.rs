use promptgrid::{BackendConfig, Config, GridPipeline, InferenceInputs};
use std::env;
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    promptgrid::logger::init_with_config(
        promptgrid::logger::LoggerConfig::development()
            .with_level(promptgrid::logger::LogLevel::Debug),
    )?;

    promptgrid::logger::log_startup_info("promptgrid", env!("CARGO_PKG_VERSION"));

    log::info!("🔍 Checking backend environment...");
    match env::var("PROMPTGRID_BACKEND_URL") {
        Ok(url) => log::info!("PROMPTGRID_BACKEND_URL: {}", url),
        Err(_) => {
            log::warn!("⚠️  PROMPTGRID_BACKEND_URL not set, using http://127.0.0.1:7860/generate")
        }
    }

    let config = Config::from_env();
    promptgrid::logger::log_config_info(&config);

    let backend_config = config
        .backend
        .clone()
        .unwrap_or_else(BackendConfig::new)
        .with_endpoint(
            env::var("PROMPTGRID_BACKEND_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:7860/generate".to_string()),
        );

    log::info!("🔄 Creating grid pipeline...");
    let pipeline = match GridPipeline::new(backend_config) {
        Ok(pipeline) => {
            log::info!("✅ Pipeline initialized successfully");
            pipeline
        }
        Err(e) => {
            log::error!("❌ Failed to initialize pipeline: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🎨 Available style presets:");
    for name in GridPipeline::styles() {
        log::info!("  {}", name);
    }

    log::info!("🔲 Available grid sizes:");
    for name in GridPipeline::grid_sizes() {
        log::info!("  {}", name);
    }

    #[cfg(feature = "server")]
    if env::var("PROMPTGRID_SERVE").map_or(false, |val| val == "true") {
        let server_config = config.server.clone().unwrap_or_default();
        return Ok(promptgrid::server::run(pipeline, server_config).await?);
    }

    let output_dir = config.output_dir.clone().unwrap_or_else(|| ".".to_string());

    // Test 1: pass-through style, single tile, fixed seed
    log::info!("🧪 Testing single-tile generation with a fixed seed...");

    let inputs = InferenceInputs::new(
        "A tiny astronaut hatching from an egg on the moon, 4k, planet theme",
    )
    .with_seed(42)
    .with_dimensions(512, 512);

    match pipeline.infer(inputs).await {
        Ok(outcome) => {
            log::info!("✅ Generation successful!");
            log::info!("🌱 Seed used: {}", outcome.seed);
            log::info!(
                "📏 Composed image: {}x{}",
                outcome.image.width(),
                outcome.image.height()
            );
            save_png(&outcome.image, &output_dir, "single_1x1", outcome.seed)?;
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            log::warn!("💡 Is the diffusion backend running and reachable?");
        }
    }

    log::info!("---");

    // Test 2: styled prompt, 2x2 grid, randomized seed
    log::info!("🧪 Testing styled 2x2 grid generation with a random seed...");

    let inputs = InferenceInputs::new("A cat holding a sign that says hello world")
        .with_style("HD+")
        .with_grid_size("2x2")
        .with_dimensions(512, 512)
        .with_random_seed();

    match pipeline.infer(inputs).await {
        Ok(outcome) => {
            log::info!("✅ Generation successful!");
            log::info!("🌱 Seed used: {} (echo this to reproduce)", outcome.seed);
            log::info!(
                "📏 Composed image: {}x{}",
                outcome.image.width(),
                outcome.image.height()
            );
            save_png(&outcome.image, &output_dir, "styled_2x2", outcome.seed)?;
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            log::warn!("💡 Is the diffusion backend running and reachable?");
        }
    }

    log::info!("🎉 All demo requests completed!");
    log::info!("💡 Check the generated image files in {}", output_dir);

    Ok(())
}

fn save_png(
    image: &image::RgbImage,
    output_dir: &str,
    label: &str,
    seed: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let filename = Path::new(output_dir).join(format!("grid_{}_{}.png", label, seed));
    let png = promptgrid::compositor::encode_png(image)?;
    match fs::write(&filename, png) {
        Ok(_) => log::info!("💾 Image saved to: {}", filename.display()),
        Err(e) => log::error!("❌ Failed to save image: {}", e),
    }
    Ok(())
}
