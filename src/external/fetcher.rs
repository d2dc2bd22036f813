use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::ScrapeError;

/// 页面抓取接口
///
/// 编排层只依赖这个 trait，测试时可替换为本地实现。
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 以查询参数请求列表页，返回 HTML 文本
    async fn fetch_page(&self, params: &[(&str, String)]) -> Result<String, ScrapeError>;
}

/// 基于 reqwest 的列表页抓取
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, params: &[(&str, String)]) -> Result<String, ScrapeError> {
        tracing::debug!("GET {} {:?}", self.base_url, params);

        let response = self.client
            .get(&self.base_url)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Upstream(format!(
                "{} returned HTTP status {}",
                self.base_url, status
            )));
        }

        Ok(response.text().await?)
    }
}
