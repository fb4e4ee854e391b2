use crate::error::ConfigError;
use serde::Deserialize;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入 Excel 文件
    pub input_file: String,
    /// 输出 Excel 文件
    pub output_file: String,
    /// 同时处理的行数（1 = 顺序处理）
    pub max_concurrent_rows: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- 邮编查询页面 ---
    pub lookup_base_url: String,
    pub lookup_timeout_secs: u64,
    pub user_agent: String,
    // --- 路由 API ---
    pub routing_base_url: String,
    pub routing_api_key: String,
    pub routing_timeout_secs: u64,
    /// 出行方式（未设置时使用 car 并给出提示）
    pub travel_mode: Option<String>,
    /// 请求路况/城区分段和备选路线
    pub route_annotations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "input.xlsx".to_string(),
            output_file: "coordenadas_cp.xlsx".to_string(),
            max_concurrent_rows: 1,
            verbose_logging: false,
            lookup_base_url: "https://www.codigo-postal.pt/".to_string(),
            lookup_timeout_secs: 10,
            user_agent: "Mozilla/5.0".to_string(),
            routing_base_url: "https://api.tomtom.com/routing/1/calculateRoute".to_string(),
            routing_api_key: String::new(),
            routing_timeout_secs: 10,
            travel_mode: None,
            route_annotations: false,
        }
    }
}

/// TOML 配置文件，所有字段均可省略
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    input_file: Option<String>,
    output_file: Option<String>,
    max_concurrent_rows: Option<usize>,
    verbose_logging: Option<bool>,
    lookup_base_url: Option<String>,
    lookup_timeout_secs: Option<u64>,
    user_agent: Option<String>,
    routing_base_url: Option<String>,
    routing_api_key: Option<String>,
    routing_timeout_secs: Option<u64>,
    travel_mode: Option<String>,
    route_annotations: Option<bool>,
}

impl Config {
    /// 加载配置：默认值 → CONFIG_FILE 指向的 TOML 文件 → 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::from_toml_file(&path)?,
            Err(_) => Self::default(),
        };
        Ok(Self::from_env_with(base))
    }

    pub fn from_env() -> Self {
        Self::from_env_with(Self::default())
    }

    /// 用环境变量覆盖给定配置；无法解析的值沿用原值
    pub fn from_env_with(base: Self) -> Self {
        Self {
            input_file: std::env::var("INPUT_FILE").unwrap_or(base.input_file),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(base.output_file),
            max_concurrent_rows: std::env::var("MAX_CONCURRENT_ROWS").ok().and_then(|v| v.parse().ok()).unwrap_or(base.max_concurrent_rows),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(base.verbose_logging),
            lookup_base_url: std::env::var("LOOKUP_BASE_URL").unwrap_or(base.lookup_base_url),
            lookup_timeout_secs: std::env::var("LOOKUP_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(base.lookup_timeout_secs),
            user_agent: std::env::var("USER_AGENT").unwrap_or(base.user_agent),
            routing_base_url: std::env::var("ROUTING_BASE_URL").unwrap_or(base.routing_base_url),
            routing_api_key: std::env::var("ROUTING_API_KEY").unwrap_or(base.routing_api_key),
            routing_timeout_secs: std::env::var("ROUTING_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(base.routing_timeout_secs),
            travel_mode: std::env::var("TRAVEL_MODE").ok().filter(|v| !v.trim().is_empty()).or(base.travel_mode),
            route_annotations: std::env::var("ROUTE_ANNOTATIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(base.route_annotations),
        }
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::FileParseFailed {
            path: path.to_string(),
            source,
        })
    }

    fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let default = Self::default();
        Ok(Self {
            input_file: file.input_file.unwrap_or(default.input_file),
            output_file: file.output_file.unwrap_or(default.output_file),
            max_concurrent_rows: file.max_concurrent_rows.unwrap_or(default.max_concurrent_rows),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
            lookup_base_url: file.lookup_base_url.unwrap_or(default.lookup_base_url),
            lookup_timeout_secs: file.lookup_timeout_secs.unwrap_or(default.lookup_timeout_secs),
            user_agent: file.user_agent.unwrap_or(default.user_agent),
            routing_base_url: file.routing_base_url.unwrap_or(default.routing_base_url),
            routing_api_key: file.routing_api_key.unwrap_or(default.routing_api_key),
            routing_timeout_secs: file.routing_timeout_secs.unwrap_or(default.routing_timeout_secs),
            travel_mode: file.travel_mode.or(default.travel_mode),
            route_annotations: file.route_annotations.unwrap_or(default.route_annotations),
        })
    }
}
