//! 画廊抓取 API 端点

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::models::{GalleryInfo, PostsResult};

fn default_page() -> u32 {
    1
}

fn default_list_num() -> u32 {
    50
}

fn default_use_cache() -> bool {
    true
}

/// 帖子列表查询参数
#[derive(Debug, Deserialize)]
pub struct PostsQuery {
    pub id: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_list_num")]
    pub list_num: u32,
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}

/// 画廊信息查询参数
#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub id: Option<String>,
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}

fn require_id(id: Option<String>) -> ApiResult<String> {
    id.filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing required query parameter: id".to_string()))
}

/// 获取画廊帖子列表
///
/// # 端点
/// GET {prefix}/gallery/posts?id=...&page=1&list_num=50&use_cache=true
pub async fn get_gallery_posts(
    State(state): State<AppState>,
    Query(query): Query<PostsQuery>,
) -> ApiResult<Json<PostsResult>> {
    let id = require_id(query.id)?;
    tracing::info!(
        "Fetching posts for gallery: {}, page: {}, list_num: {}, use_cache: {}",
        id, query.page, query.list_num, query.use_cache
    );

    let result = state
        .gallery_client
        .get_posts(&id, query.page, query.list_num, query.use_cache)
        .await?;

    Ok(Json(result))
}

/// 获取画廊详细信息
///
/// # 端点
/// GET {prefix}/gallery/info?id=...&use_cache=true
pub async fn get_gallery_info(
    State(state): State<AppState>,
    Query(query): Query<InfoQuery>,
) -> ApiResult<Json<GalleryInfo>> {
    let id = require_id(query.id)?;
    tracing::info!("Fetching info for gallery: {}, use_cache: {}", id, query.use_cache);

    let info = state.gallery_client.get_info(&id, query.use_cache).await?;

    Ok(Json(info))
}
