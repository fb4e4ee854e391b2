//! 坐标解析服务 - 业务能力层
//!
//! 只负责"查询键 → 坐标"能力，不关心流程。
//! 页面抓取规则藏在 `CoordinateExtractor` 后面，可以替换为结构化解析而不影响调用方。

use crate::clients::LookupClient;
use crate::error::{AppResult, ResolveError};
use crate::models::{Coordinate, LocationKey};
use crate::utils::parse_number;
use regex::Regex;
use std::future::Future;
use tracing::debug;

/// 坐标标记：`pull-right gps` 之后的两个带符号小数（纬度、经度）
const GPS_MARKER_PATTERN: &str = r"pull-right\s+gps[\s\S]*?([+-]?\d+\.\d+)[\s,]+([+-]?\d+\.\d+)";

/// 从页面中提取原始坐标文本
pub trait CoordinateExtractor {
    /// 返回每个标记的 (纬度文本, 经度文本)
    fn extract<'a>(&self, html: &'a str) -> Vec<(&'a str, &'a str)>;
}

/// 基于正则表达式的提取规则
pub struct GpsMarkerExtractor {
    pattern: Regex,
}

impl GpsMarkerExtractor {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            pattern: Regex::new(GPS_MARKER_PATTERN)?,
        })
    }
}

impl CoordinateExtractor for GpsMarkerExtractor {
    fn extract<'a>(&self, html: &'a str) -> Vec<(&'a str, &'a str)> {
        self.pattern
            .captures_iter(html)
            .filter_map(|cap| Some((cap.get(1)?.as_str(), cap.get(2)?.as_str())))
            .collect()
    }
}

/// 坐标解析能力
pub trait CoordinateResolver {
    /// 解析一个查询键
    ///
    /// 失败时返回原因，调用方决定如何降级
    fn resolve(&self, key: &LocationKey) -> impl Future<Output = Result<Coordinate, ResolveError>> + Send;
}

/// 抓取查询页面并取所有标记的平均值
///
/// 同一邮编或街道片段可能对应多个地址，平均值近似代表中心点
pub struct ScrapingResolver<C, E = GpsMarkerExtractor> {
    client: C,
    extractor: E,
}

impl<C: LookupClient> ScrapingResolver<C> {
    /// 使用默认提取规则创建
    pub fn new(client: C) -> AppResult<Self> {
        Ok(Self {
            client,
            extractor: GpsMarkerExtractor::new()?,
        })
    }
}

impl<C: LookupClient, E: CoordinateExtractor> ScrapingResolver<C, E> {
    /// 使用自定义提取规则创建
    pub fn with_extractor(client: C, extractor: E) -> Self {
        Self { client, extractor }
    }

    /// 从页面计算坐标
    pub fn coordinate_from_html(&self, html: &str) -> Result<Coordinate, ResolveError> {
        let markers = self.extractor.extract(html);
        if markers.is_empty() {
            return Err(ResolveError::NoMarkers);
        }
        average_markers(&markers)
    }
}

impl<C, E> CoordinateResolver for ScrapingResolver<C, E>
where
    C: LookupClient + Sync,
    E: CoordinateExtractor + Sync,
{
    async fn resolve(&self, key: &LocationKey) -> Result<Coordinate, ResolveError> {
        let reply = self.client.fetch_page(key).await?;
        if !reply.is_success() {
            return Err(ResolveError::BadStatus(reply.status));
        }

        let coordinate = self.coordinate_from_html(&reply.body)?;
        debug!(
            "{} -> ({}, {})",
            key, coordinate.latitude, coordinate.longitude
        );
        Ok(coordinate)
    }
}

/// 纬度和经度分别求平均
///
/// 无法解析的数值被丢弃；任一列表为空则视为未找到
fn average_markers(markers: &[(&str, &str)]) -> Result<Coordinate, ResolveError> {
    let latitudes: Vec<f64> = markers.iter().filter_map(|(lat, _)| parse_number(Some(*lat))).collect();
    let longitudes: Vec<f64> = markers.iter().filter_map(|(_, lon)| parse_number(Some(*lon))).collect();

    if latitudes.is_empty() || longitudes.is_empty() {
        return Err(ResolveError::UnparseableCoordinates {
            markers: markers.len(),
        });
    }

    let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;
    Ok(Coordinate::new(mean(&latitudes), mean(&longitudes)))
}
