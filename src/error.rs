use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 网络传输错误
    #[error("传输错误: {0}")]
    Transport(#[from] TransportError),
    /// 搜索错误
    #[error("搜索错误: {0}")]
    Search(#[from] SearchError),
    /// 提交错误
    #[error("提交错误: {0}")]
    Submit(#[from] SubmitError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 网络传输错误（请求未完成，或响应体无法解析）
#[derive(Debug, Error)]
pub enum TransportError {
    /// 网络请求失败
    #[error("请求失败 ({endpoint}): {message}")]
    RequestFailed { endpoint: String, message: String },
    /// JSON 解析失败
    #[error("响应解析失败 ({endpoint}): {source}")]
    DecodeFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// 请求体序列化失败
    #[error("请求体序列化失败 ({endpoint}): {source}")]
    EncodeFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 搜索错误
#[derive(Debug, Error)]
pub enum SearchError {
    /// 查询文本为空
    #[error("请输入要搜索的文本")]
    EmptyQuery,
    /// 后端返回非 2xx 状态码
    #[error("搜索失败 ({endpoint}): HTTP {status}")]
    Backend { endpoint: String, status: u16 },
    /// 网络或解析错误
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// 提交错误
#[derive(Debug, Error)]
pub enum SubmitError {
    /// 必填字段缺失
    #[error("缺少必填字段: {}", .fields.join(", "))]
    MissingRequiredField { fields: Vec<&'static str> },
    /// 后端拒绝了写入
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// 网络错误
    #[error("网络错误: {0}")]
    Transport(#[from] TransportError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// HTTP 客户端构建失败
    #[error("HTTP 客户端构建失败: {0}")]
    ClientBuildFailed(String),
}

// ========== 便捷构造函数 ==========

impl TransportError {
    /// 创建请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: impl std::fmt::Display) -> Self {
        TransportError::RequestFailed {
            endpoint: endpoint.into(),
            message: source.to_string(),
        }
    }

    /// 创建 JSON 解析错误
    pub fn decode_failed(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        TransportError::DecodeFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建请求体序列化错误
    pub fn encode_failed(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        TransportError::EncodeFailed {
            endpoint: endpoint.into(),
            source,
        }
    }
}

impl SubmitError {
    /// 创建字段缺失错误
    pub fn missing(fields: Vec<&'static str>) -> Self {
        SubmitError::MissingRequiredField { fields }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
