use promptgrid::{BackendConfig, GridPipeline, InferenceInputs};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("⚠️  No .env file found"),
    }
    promptgrid::logger::init()?;

    let endpoint = env::var("PROMPTGRID_BACKEND_URL")?;
    let config = BackendConfig::new().with_endpoint(endpoint);

    let pipeline = GridPipeline::new(config)?;
    let inputs = InferenceInputs::new(
        "An anime-style illustration of a golden-brown wiener schnitzel on a plate",
    )
    .with_style("3840 x 2160")
    .with_grid_size("2x3")
    .with_random_seed();

    let outcome = pipeline.infer(inputs).await?;
    println!("seed used: {}", outcome.seed);

    let png = promptgrid::compositor::encode_png(&outcome.image)?;
    fs::write("grid_2x3.png", png)?;
    println!("saved grid_2x3.png");

    Ok(())
}
