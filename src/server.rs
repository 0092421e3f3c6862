//! Optional HTTP surface over the pipeline, for UI layers that talk JSON.

use crate::{
    compositor,
    config::ServerConfig,
    error::GridError,
    models::InferenceInputs,
    pipeline::GridPipeline,
    styles,
};
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct InferResponse {
    /// Base64-encoded PNG of the composed grid.
    pub image: String,
    /// The seed that actually drove generation, for reproducible re-runs.
    pub seed: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

async fn infer(
    pipeline: web::Data<GridPipeline>,
    inputs: web::Json<InferenceInputs>,
) -> impl Responder {
    match pipeline.infer(inputs.into_inner()).await {
        Ok(outcome) => match compositor::encode_png(&outcome.image) {
            Ok(png) => HttpResponse::Ok().json(InferResponse {
                image: BASE64.encode(png),
                seed: outcome.seed,
            }),
            Err(e) => HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            }),
        },
        Err(e @ GridError::UnknownStyle(_)) => HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        }),
        Err(e @ GridError::BackendError(_)) | Err(e @ GridError::InsufficientImages(_)) => {
            HttpResponse::BadGateway().json(ErrorResponse {
                error: e.to_string(),
            })
        }
        Err(e) => HttpResponse::InternalServerError().json(ErrorResponse {
            error: e.to_string(),
        }),
    }
}

async fn list_styles() -> impl Responder {
    HttpResponse::Ok().json(styles::style_names())
}

async fn list_grids() -> impl Responder {
    HttpResponse::Ok().json(styles::grid_names())
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/v1/infer", web::post().to(infer))
        .route("/v1/styles", web::get().to(list_styles))
        .route("/v1/grids", web::get().to(list_grids));
}

/// Serve the pipeline until the process is stopped.
pub async fn run(pipeline: GridPipeline, config: ServerConfig) -> std::io::Result<()> {
    let bind_address = config
        .bind_address
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let port = config.port.unwrap_or(8080);

    log::info!("🌐 Serving on http://{}:{}", bind_address, port);

    let data = web::Data::new(pipeline);
    HttpServer::new(move || App::new().app_data(data.clone()).configure(routes))
        .bind((bind_address, port))?
        .run()
        .await
}
