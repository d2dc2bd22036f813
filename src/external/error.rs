// 抓取错误类型定义
//
// 外部站点抓取过程中可能出现的错误，由 API 层映射为 HTTP 状态码

use thiserror::Error;

/// 抓取操作的统一错误类型
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// 无法连接上游站点
    #[error("Failed to connect to DC Inside. The service might be down: {0}")]
    Connection(String),

    /// 上游返回错误状态或其它传输层错误
    #[error("Failed to fetch data from DC Inside: {0}")]
    Upstream(String),

    /// 其它意外错误
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

// 实现从 reqwest::Error 到 ScrapeError 的转换
impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ScrapeError::Connection(err.to_string())
        } else if err.is_builder() {
            ScrapeError::Unexpected(err.to_string())
        } else {
            ScrapeError::Upstream(err.to_string())
        }
    }
}

impl From<tokio::task::JoinError> for ScrapeError {
    fn from(err: tokio::task::JoinError) -> Self {
        ScrapeError::Unexpected(err.to_string())
    }
}
