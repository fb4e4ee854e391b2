use crate::error::ConfigError;
use phf::phf_map;
use std::fmt;

/// 出行方式，整个批次只选择一次
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TravelMode {
    /// 小汽车
    #[default]
    Car,
    /// 卡车
    Truck,
    /// 厢式货车
    Van,
}

/// 可接受的标签（API 名称和界面上的葡语名称）
static LABELS: phf::Map<&'static str, TravelMode> = phf_map! {
    "car" => TravelMode::Car,
    "carro" => TravelMode::Car,
    "truck" => TravelMode::Truck,
    "camião" => TravelMode::Truck,
    "camiao" => TravelMode::Truck,
    "van" => TravelMode::Van,
    "carrinha" => TravelMode::Van,
};

/// 未选择出行方式时返回给调用方的提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelModeAdvisory {
    DefaultedToCar,
}

impl fmt::Display for TravelModeAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelModeAdvisory::DefaultedToCar => write!(
                f,
                "Não selecionou o tipo de transporte. Será utilizado \"carro\" como padrão."
            ),
        }
    }
}

impl TravelMode {
    /// 路由 API 中的 travelMode 参数值
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Car => "car",
            TravelMode::Truck => "truck",
            TravelMode::Van => "van",
        }
    }

    /// 葡语显示名称
    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Car => "carro",
            TravelMode::Truck => "camião",
            TravelMode::Van => "carrinha",
        }
    }

    /// 从标签解析（不区分大小写）
    pub fn from_label(label: &str) -> Option<Self> {
        LABELS.get(label.trim().to_lowercase().as_str()).copied()
    }

    /// 解析配置中的出行方式
    ///
    /// # 返回
    /// 未设置时返回 (Car, Some(提示))；无法识别的标签返回错误
    pub fn resolve(selection: Option<&str>) -> Result<(Self, Option<TravelModeAdvisory>), ConfigError> {
        match selection.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok((TravelMode::Car, Some(TravelModeAdvisory::DefaultedToCar))),
            Some(label) => Self::from_label(label)
                .map(|mode| (mode, None))
                .ok_or_else(|| ConfigError::UnknownTravelMode(label.to_string())),
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_map_to_api_values() {
        assert_eq!(TravelMode::from_label("carro"), Some(TravelMode::Car));
        assert_eq!(TravelMode::from_label("Camião"), Some(TravelMode::Truck));
        assert_eq!(TravelMode::from_label(" VAN "), Some(TravelMode::Van));
        assert_eq!(TravelMode::from_label("bicicleta"), None);
        assert_eq!(TravelMode::Truck.as_str(), "truck");
    }

    #[test]
    fn test_unset_mode_defaults_to_car_with_advisory() {
        let (mode, advisory) = TravelMode::resolve(None).unwrap();
        assert_eq!(mode, TravelMode::Car);
        assert_eq!(advisory, Some(TravelModeAdvisory::DefaultedToCar));

        let (_, advisory) = TravelMode::resolve(Some("  ")).unwrap();
        assert!(advisory.is_some());
    }

    #[test]
    fn test_explicit_mode_has_no_advisory() {
        let (mode, advisory) = TravelMode::resolve(Some("carrinha")).unwrap();
        assert_eq!(mode, TravelMode::Van);
        assert!(advisory.is_none());
        assert!(TravelMode::resolve(Some("avião")).is_err());
    }
}
