use std::fmt;

/// 纬度/经度坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// 路由服务使用的 "lat,lon" 形式
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// 行驶距离和时间，均保留两位小数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMetrics {
    pub distance_km: f64,
    pub time_minutes: f64,
}

impl RouteMetrics {
    /// 由路线摘要（米、秒）换算为公里、分钟
    pub fn from_summary(length_in_meters: f64, travel_time_in_seconds: f64) -> Self {
        Self {
            distance_km: round2(length_in_meters / 1000.0),
            time_minutes: round2(travel_time_in_seconds / 60.0),
        }
    }
}

/// 保留两位小数，恰好位于中点时取偶数
///
/// 中点按输入的精确二进制值判断：`value * 100` 的舍入误差由 `mul_add` 求出，
/// 因此 12.345（实际略大于中点）进位，而 1.125（精确中点）取偶
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let residual = value.mul_add(100.0, -scaled);
    let floor = scaled.floor();

    let rounded = if scaled - floor != 0.5 {
        scaled.round()
    } else if residual > 0.0 {
        floor + 1.0
    } else if residual < 0.0 {
        floor
    } else {
        scaled.round_ties_even()
    };
    rounded / 100.0
}
