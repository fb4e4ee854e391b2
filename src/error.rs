//! 错误类型
//!
//! 单行内的失败（解析、查找、路由）都不会中断整个批次：
//! 它们以 `ResolveError` / `RouteError` 的形式保留原因，
//! 由编排层降级为"缺失值 + 日志条目"。
//! 只有 `InputValidationError` 会在处理任何一行之前终止程序。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 输入文件校验失败
    #[error("输入校验失败: {0}")]
    InputValidation(#[from] InputValidationError),
    /// 读取 Excel 文件失败
    #[error("读取工作簿失败: {0}")]
    Workbook(#[from] calamine::Error),
    /// 生成 Excel 报告失败
    #[error("导出报告失败: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
    /// 文件读写错误
    #[error("文件错误: {0}")]
    Io(#[from] std::io::Error),
    /// HTTP 客户端构建失败
    #[error("HTTP 客户端错误: {0}")]
    Http(#[from] reqwest::Error),
    /// 坐标提取规则编译失败
    #[error("正则表达式错误: {0}")]
    Regex(#[from] regex::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 无法识别的出行方式
    #[error("无法识别的出行方式: '{0}' (可选: car, truck, van, carro, camião, carrinha)")]
    UnknownTravelMode(String),
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    FileParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 配置文件读取失败
    #[error("配置文件读取失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 输入表格校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputValidationError {
    /// 表格没有数据行
    #[error("O ficheiro Excel está vazio. Por favor, verifique se existem dados no ficheiro.")]
    EmptyTable,
    /// 缺少必需的列
    #[error("O ficheiro deve conter as colunas: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    /// 关键列中存在空值
    #[error("Existem códigos postais vazios no ficheiro (coluna {column}, linha {row}).")]
    NullKeys { column: String, row: usize },
}

/// 传输层错误（超时、DNS、连接中断等）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("请求超时")]
    Timeout,
    #[error("连接失败: {0}")]
    Connect(String),
    #[error("请求失败: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// 坐标解析失败的原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// 查询服务不可达
    #[error("查询服务不可达: {0}")]
    Transport(#[from] TransportError),
    /// 查询服务返回非成功状态码
    #[error("查询服务返回状态码 {0}")]
    BadStatus(u16),
    /// 页面中没有坐标标记
    #[error("页面中没有坐标标记")]
    NoMarkers,
    /// 找到了标记，但数值全部无法解析
    #[error("找到 {markers} 个坐标标记，但数值无法解析")]
    UnparseableCoordinates { markers: usize },
}

/// 路由不可用的原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// 起点或终点坐标缺失，未发出请求
    #[error("起点或终点坐标缺失")]
    MissingEndpoint,
    /// 路由服务不可达
    #[error("路由服务不可达: {0}")]
    Transport(#[from] TransportError),
    /// 路由服务返回非成功状态码
    #[error("路由服务返回状态码 {0}")]
    BadStatus(u16),
    /// 响应中没有可用路线
    #[error("路由服务没有返回路线")]
    NoRoutes,
    /// 响应 JSON 结构不符
    #[error("路由响应无法解析: {0}")]
    InvalidPayload(String),
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
