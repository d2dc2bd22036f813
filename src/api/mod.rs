pub mod error;
pub mod gallery;
pub mod health;
pub mod response;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Settings;
use crate::external::GalleryClient;

#[derive(Clone)]
pub struct AppState {
    pub gallery_client: GalleryClient,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(gallery_client: GalleryClient, settings: Settings) -> Self {
        Self {
            gallery_client,
            settings: Arc::new(settings),
        }
    }
}

/// 根路径说明
async fn root() -> Json<Value> {
    Json(json!({
        "message": "DC Inside Scraper API - Visit /api/v1/gallery/posts or /api/v1/gallery/info"
    }))
}

/// 构建路由，接口挂在 `settings.api_prefix` 下
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/gallery/posts", get(gallery::get_gallery_posts))
        .route("/gallery/info", get(gallery::get_gallery_info))
        .route("/health", get(health::health_check))
        .route("/cache/stats", get(health::get_cache_stats))
        .route("/cache/clear", post(health::clear_cache));

    let prefix = state.settings.api_prefix.clone();
    let app = Router::new().route("/", get(root));

    // axum 不允许在根路径 nest
    let app = if prefix.is_empty() {
        app.merge(api)
    } else {
        app.nest(&prefix, api)
    };

    app.layer(CorsLayer::permissive()).with_state(state)
}
