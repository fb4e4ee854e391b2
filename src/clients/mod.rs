//! 外部服务客户端
//!
//! 只负责传输：发出请求并返回状态码和响应体，不解释内容。
//! 两个 trait 是替换传输层（例如测试中的内存实现）的接缝。

pub mod lookup_client;
pub mod routing_client;

use crate::error::TransportError;
use crate::models::{Coordinate, LocationKey, TravelMode};
use std::future::Future;

pub use lookup_client::HttpLookupClient;
pub use routing_client::HttpRoutingClient;

/// HTTP 响应（状态码 + 文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 邮编查询页面
pub trait LookupClient {
    /// 获取某个查询键对应的 HTML 页面
    fn fetch_page(&self, key: &LocationKey) -> impl Future<Output = Result<HttpReply, TransportError>> + Send;
}

/// 路由服务
pub trait RoutingClient {
    /// 查询两点之间的路线，返回原始 JSON 文本
    fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> impl Future<Output = Result<HttpReply, TransportError>> + Send;
}
