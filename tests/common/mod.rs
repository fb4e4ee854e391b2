//! 集成测试共用的内存传输层

#![allow(dead_code)]

use postal_distance::clients::{HttpReply, LookupClient, RoutingClient};
use postal_distance::error::TransportError;
use postal_distance::services::{RouteCalculator, ScrapingResolver};
use postal_distance::{BatchOrchestrator, Coordinate, LocationKey, TravelMode};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// 生成带一个 GPS 标记的查询页面
pub fn gps_page(latitude: &str, longitude: &str) -> String {
    format!(
        r#"<html><body><div class="result"><span class="pull-right gps">{}, {}</span></div></body></html>"#,
        latitude, longitude
    )
}

pub fn route_json(length_in_meters: u64, travel_time_in_seconds: u64) -> String {
    format!(
        r#"{{"routes":[{{"summary":{{"lengthInMeters":{},"travelTimeInSeconds":{}}}}}]}}"#,
        length_in_meters, travel_time_in_seconds
    )
}

/// 按原始键返回预设页面；未登记的键返回 404
#[derive(Default)]
pub struct FakeLookup {
    pages: HashMap<String, HttpReply>,
    calls: AtomicUsize,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, key: &str, html: impl Into<String>) -> Self {
        self.pages.insert(key.to_string(), HttpReply::new(200, html));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LookupClient for FakeLookup {
    async fn fetch_page(&self, key: &LocationKey) -> Result<HttpReply, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .pages
            .get(&key.to_string())
            .cloned()
            .unwrap_or_else(|| HttpReply::new(404, "")))
    }
}

impl LookupClient for &FakeLookup {
    async fn fetch_page(&self, key: &LocationKey) -> Result<HttpReply, TransportError> {
        (**self).fetch_page(key).await
    }
}

/// 按 "lat,lon:lat,lon" 返回预设响应；未登记的路线返回 500
#[derive(Default)]
pub struct FakeRouting {
    routes: HashMap<String, HttpReply>,
    calls: AtomicUsize,
    requests: Mutex<Vec<TravelMode>>,
}

impl FakeRouting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, origin: Coordinate, destination: Coordinate, body: impl Into<String>) -> Self {
        self.routes
            .insert(format!("{}:{}", origin, destination), HttpReply::new(200, body));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn modes(&self) -> Vec<TravelMode> {
        self.requests.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl RoutingClient for FakeRouting {
    async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<HttpReply, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut modes) = self.requests.lock() {
            modes.push(mode);
        }
        Ok(self
            .routes
            .get(&format!("{}:{}", origin, destination))
            .cloned()
            .unwrap_or_else(|| HttpReply::new(500, "")))
    }
}

impl RoutingClient for &FakeRouting {
    async fn fetch_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        mode: TravelMode,
    ) -> Result<HttpReply, TransportError> {
        (**self).fetch_route(origin, destination, mode).await
    }
}

/// 以借用的假客户端组装编排器，便于测试后检查调用次数
pub fn orchestrator<'a>(
    lookup: &'a FakeLookup,
    routing: &'a FakeRouting,
) -> BatchOrchestrator<ScrapingResolver<&'a FakeLookup>, &'a FakeRouting> {
    let resolver = ScrapingResolver::new(lookup).expect("默认提取规则应能编译");
    BatchOrchestrator::new(resolver, RouteCalculator::new(routing))
}
