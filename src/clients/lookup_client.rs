/// 邮编查询页面客户端
///
/// 目标站点会拒绝没有标识的客户端，所以带上浏览器式 User-Agent
use crate::clients::{HttpReply, LookupClient};
use crate::config::Config;
use crate::error::{AppResult, TransportError};
use crate::models::LocationKey;
use std::time::Duration;
use tracing::debug;

pub struct HttpLookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLookupClient {
    /// 创建新的查询客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.lookup_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            base_url: config.lookup_base_url.clone(),
        })
    }
}

impl LookupClient for HttpLookupClient {
    async fn fetch_page(&self, key: &LocationKey) -> Result<HttpReply, TransportError> {
        debug!("查询坐标: {} -> {}", key, self.base_url);

        let response = self
            .http
            .get(&self.base_url)
            .query(&key.query_params())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("查询返回 {} ({} 字节)", status, body.len());
        Ok(HttpReply { status, body })
    }
}
