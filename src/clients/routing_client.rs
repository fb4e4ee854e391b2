/// 路由 API 客户端
use crate::clients::{HttpReply, RoutingClient};
use crate::config::Config;
use crate::error::{AppResult, TransportError};
use crate::models::{Coordinate, TravelMode};
use std::time::Duration;
use tracing::debug;

pub struct HttpRoutingClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    route_annotations: bool,
}

impl HttpRoutingClient {
    /// 创建新的路由客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.routing_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.routing_base_url.trim_end_matches('/').to_string(),
            api_key: config.routing_api_key.clone(),
            route_annotations: config.route_annotations,
        })
    }

    /// 路由地址：{base}/{lat,lon}:{lat,lon}/json
    fn route_url(&self, origin: Coordinate, destination: Coordinate) -> String {
        format!("{}/{}:{}/json", self.base_url, origin, destination)
    }

    /// 查询参数；开启注解时额外请求路况/城区分段和备选路线
    fn query_params(&self, mode: TravelMode) -> Vec<(&'static str, String)> {
        let mut params = vec![("key", self.api_key.clone())];
        if self.route_annotations {
            params.push(("maxAlternatives", "5".to_string()));
            params.push(("sectionType", "traffic".to_string()));
            params.push(("sectionType", "urban".to_string()));
            params.push(("extendedRouteRepresentation", "travelTime".to_string()));
        }
        params.push(("travelMode", mode.as_str().to_string()));
        params
    }
}

impl RoutingClient for HttpRoutingClient {
    async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<HttpReply, TransportError> {
        let url = self.route_url(origin, destination);
        debug!("路由请求: {} (travelMode={})", url, mode.as_str());

        let response = self
            .http
            .get(&url)
            .query(&self.query_params(mode))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}
