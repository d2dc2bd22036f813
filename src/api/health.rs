use axum::{
    extract::State,
    response::IntoResponse,
};
use serde_json::json;

use super::AppState;
use super::error::ApiResult;
use super::response::{success, ApiResponse};

/// 健康检查端点
pub async fn health_check(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let cache_stats = state.gallery_client.get_cache_stats();

    Ok(success(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "upstream": state.settings.base_url,
        "cache": cache_stats,
    })))
}

/// 获取缓存统计
pub async fn get_cache_stats(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    Ok(success(state.gallery_client.get_cache_stats()))
}

/// 清空所有缓存
pub async fn clear_cache(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    state.gallery_client.clear_cache();
    tracing::info!("All caches cleared");

    Ok(ApiResponse::success_with_message(
        json!({ "timestamp": chrono::Utc::now().to_rfc3339() }),
        "All caches cleared",
    ))
}
