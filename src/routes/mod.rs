use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    middleware::from_fn,
    routing::get,
};
use tower_http::services::ServeDir;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::session::ensure_session,
    response::{ApiResponse, Meta},
    state::{AppState, UPLOADS_URL},
};

pub mod doc;
pub mod health;
pub mod params;
pub mod products;
pub mod shop;

/// Full application router with state bound; transport layers are added by the binary.
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);
    let uploads = ServeDir::new(&state.config.upload_dir);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .merge(shop::router())
        .merge(products::router())
        .route("/health", get(health::health_check))
        .nest_service("/static", static_files)
        .nest_service(UPLOADS_URL, uploads)
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(from_fn(ensure_session))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub fn parse_product_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::BadRequest("Invalid product ID".to_string()))
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
