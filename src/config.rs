// 服务配置
//
// 启动时从环境变量（以及 .env 文件）读取一次，不支持热更新

use std::time::Duration;

pub const DEFAULT_CACHE_DURATION_MINUTES: u64 = 15;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_BASE_URL: &str = "https://gall.dcinside.com/mgallery/board/lists/";
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub project_name: String,
    pub api_prefix: String,
    /// 缓存有效期
    pub cache_duration: Duration,
    /// 抓取请求的 User-Agent
    pub user_agent: String,
    /// 列表页地址
    pub base_url: String,
    pub request_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: "DC Inside Scraper API".to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            cache_duration: Duration::from_secs(DEFAULT_CACHE_DURATION_MINUTES * 60),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// 从进程环境变量读取
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过查找函数读取配置，缺失或无法解析的值使用默认值
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cache_minutes = parse_or_default(&lookup, "CACHE_DURATION_MINUTES", DEFAULT_CACHE_DURATION_MINUTES);
        let cache_secs = cache_minutes.checked_mul(60).unwrap_or_else(|| {
            tracing::warn!(
                "CACHE_DURATION_MINUTES {} is out of range, using default {}",
                cache_minutes, DEFAULT_CACHE_DURATION_MINUTES
            );
            DEFAULT_CACHE_DURATION_MINUTES * 60
        });
        let timeout_secs = parse_or_default(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            api_prefix: lookup("API_PREFIX")
                .map(|p| normalize_prefix(&p))
                .unwrap_or(defaults.api_prefix),
            cache_duration: Duration::from_secs(cache_secs),
            user_agent: non_empty(lookup("USER_AGENT")).unwrap_or(defaults.user_agent),
            base_url: non_empty(lookup("DC_BASE_URL")).unwrap_or(defaults.base_url),
            request_timeout: Duration::from_secs(timeout_secs),
            host: non_empty(lookup("HOST")).unwrap_or(defaults.host),
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT),
            ..defaults
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value for {}: {:?}, using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}

/// 去掉结尾的 `/`，空值表示挂在根路径
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
