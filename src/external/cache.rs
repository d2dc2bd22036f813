use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use serde::{Deserialize, Serialize};

use crate::models::{GalleryInfo, PostsResult};

/// 根据操作名和参数生成缓存键
///
/// 参数先按键名排序，所以参数顺序不同的等价调用得到同一个键。
/// 只用于去重，不是安全边界，MD5 足够。
pub fn generate_key(operation: &str, params: &[(&str, String)]) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let content = format!("{:?}{:?}", operation, sorted);
    format!("{:x}", md5::compute(content.as_bytes()))
}

/// 缓存条目
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    stored_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, stored_at: Instant) -> Self {
        Self { data, stored_at }
    }

    /// `now - stored_at < ttl` 时有效
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.stored_at) >= ttl
    }
}

/// 内存缓存实现
///
/// 只有按时间过期，没有容量上限。过期条目在下一次 `get` 时删除，
/// 没有后台清理任务。
#[derive(Debug, Clone)]
pub struct MemoryCache<T> {
    cache: Arc<RwLock<HashMap<String, CacheEntry<T>>>>,
    ttl: Duration,
}

impl<T: Clone> MemoryCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<T> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&self, key: &str, now: Instant) -> Option<T> {
        {
            let cache = self.cache.read().ok()?;
            let entry = cache.get(key)?;
            if !entry.is_expired(now, self.ttl) {
                return Some(entry.data.clone());
            }
        }

        // 过期了，顺手删掉
        if let Ok(mut cache) = self.cache.write() {
            // 读锁释放后可能已被重新写入，只删仍然过期的
            let still_expired = cache
                .get(key)
                .is_some_and(|entry| entry.is_expired(now, self.ttl));
            if still_expired {
                cache.remove(key);
                tracing::debug!("Evicted expired cache entry: {}", key);
            }
        }
        None
    }

    pub fn set(&self, key: String, value: T) {
        self.set_at(key, value, Instant::now());
    }

    pub(crate) fn set_at(&self, key: String, value: T, now: Instant) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key, CacheEntry::new(value, now));
        }
    }

    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    pub fn size(&self) -> usize {
        self.cache.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// 画廊抓取结果缓存
///
/// 帖子列表和画廊详情分表存放，共用同一个有效期。
/// 键由 [`generate_key`] 生成，已包含操作名。
#[derive(Debug, Clone)]
pub struct GalleryCache {
    posts_cache: MemoryCache<PostsResult>,
    info_cache: MemoryCache<GalleryInfo>,
}

impl GalleryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            posts_cache: MemoryCache::new(ttl),
            info_cache: MemoryCache::new(ttl),
        }
    }

    /// 获取帖子列表缓存
    pub fn get_posts(&self, key: &str) -> Option<PostsResult> {
        self.posts_cache.get(key)
    }

    /// 设置帖子列表缓存
    pub fn set_posts(&self, key: String, result: PostsResult) {
        self.posts_cache.set(key, result);
    }

    /// 获取画廊详情缓存
    pub fn get_info(&self, key: &str) -> Option<GalleryInfo> {
        self.info_cache.get(key)
    }

    /// 设置画廊详情缓存
    pub fn set_info(&self, key: String, info: GalleryInfo) {
        self.info_cache.set(key, info);
    }

    /// 清空所有缓存
    pub fn clear_all(&self) {
        self.posts_cache.clear();
        self.info_cache.clear();
    }

    /// 获取缓存统计信息
    pub fn get_stats(&self) -> CacheStats {
        CacheStats {
            posts_cache_size: self.posts_cache.size(),
            info_cache_size: self.info_cache.size(),
            ttl_secs: self.posts_cache.ttl().as_secs(),
        }
    }
}

/// 缓存统计信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheStats {
    pub posts_cache_size: usize,
    pub info_cache_size: usize,
    pub ttl_secs: u64,
}
