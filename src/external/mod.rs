pub mod cache;
pub mod error;
pub mod extractor;
pub mod fetcher;

use std::sync::Arc;

pub use cache::{generate_key, CacheStats, GalleryCache, MemoryCache};
pub use error::ScrapeError;
pub use fetcher::{HttpFetcher, PageFetcher};

use crate::models::{GalleryInfo, PostsResult};

const POSTS_OPERATION: &str = "posts";
const INFO_OPERATION: &str = "info";

/// 画廊抓取客户端
///
/// 先查缓存，未命中时抓取并提取，再写回缓存。
/// `use_cache = false` 只跳过读取，新结果照样写入。
#[derive(Clone)]
pub struct GalleryClient {
    fetcher: Arc<dyn PageFetcher>,
    pub cache: GalleryCache,
}

impl GalleryClient {
    pub fn new(fetcher: Arc<dyn PageFetcher>, cache: GalleryCache) -> Self {
        Self { fetcher, cache }
    }

    /// 获取帖子列表（带缓存）
    pub async fn get_posts(
        &self,
        gallery_id: &str,
        page: u32,
        list_num: u32,
        use_cache: bool,
    ) -> Result<PostsResult, ScrapeError> {
        let params = [
            ("id", gallery_id.to_string()),
            ("page", page.to_string()),
            ("list_num", list_num.to_string()),
        ];
        let cache_key = generate_key(POSTS_OPERATION, &params);

        // 检查缓存
        if use_cache {
            if let Some(cached) = self.cache.get_posts(&cache_key) {
                tracing::debug!("Cache hit for posts: {} (page {}, list_num {})", gallery_id, page, list_num);
                return Ok(cached);
            }
        }

        let html = self.fetcher.fetch_page(&params).await?;
        let id = gallery_id.to_string();
        let result = tokio::task::spawn_blocking(move || {
            extractor::build_posts_result(&html, &id, page, list_num)
        })
        .await?;

        // 缓存结果
        self.cache.set_posts(cache_key, result.clone());
        tracing::debug!(
            "Cached posts: {} (page {}, {} posts)",
            gallery_id, page, result.meta.post_count
        );

        Ok(result)
    }

    /// 获取画廊详细信息（带缓存）
    pub async fn get_info(&self, gallery_id: &str, use_cache: bool) -> Result<GalleryInfo, ScrapeError> {
        let params = [("id", gallery_id.to_string())];
        let cache_key = generate_key(INFO_OPERATION, &params);

        // 检查缓存
        if use_cache {
            if let Some(cached) = self.cache.get_info(&cache_key) {
                tracing::debug!("Cache hit for gallery info: {}", gallery_id);
                return Ok(cached);
            }
        }

        let html = self.fetcher.fetch_page(&params).await?;
        let info = tokio::task::spawn_blocking(move || extractor::build_gallery_info(&html)).await?;

        // 缓存结果
        self.cache.set_info(cache_key, info.clone());
        tracing::debug!("Cached gallery info: {}", gallery_id);

        Ok(info)
    }

    /// 获取缓存统计信息
    pub fn get_cache_stats(&self) -> CacheStats {
        self.cache.get_stats()
    }

    /// 清空所有缓存
    pub fn clear_cache(&self) {
        self.cache.clear_all();
    }
}
