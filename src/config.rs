use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 后端服务地址（页面所在的 origin）
    pub api_base_url: String,
    /// 提交成功提示的自动清除延迟（毫秒）
    pub status_clear_delay_ms: u64,
    /// 前端版本文件路径
    pub version_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 默认日志过滤规则（RUST_LOG 优先）
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".to_string(),
            status_clear_delay_ms: 2000,
            version_path: "/version.json".to_string(),
            verbose_logging: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 先读取 `APHORISM_CONFIG_FILE` 指定的 TOML 文件（如果有），再叠加环境变量
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var("APHORISM_CONFIG_FILE") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件加载配置，缺失字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;

        Ok(config)
    }

    fn with_env_overrides(self) -> Self {
        Self {
            api_base_url: std::env::var("APHORISM_API_BASE_URL").unwrap_or(self.api_base_url),
            status_clear_delay_ms: std::env::var("STATUS_CLEAR_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.status_clear_delay_ms),
            version_path: std::env::var("VERSION_PATH").unwrap_or(self.version_path),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            log_filter: std::env::var("LOG_FILTER").unwrap_or(self.log_filter),
        }
    }

    pub fn status_clear_delay(&self) -> Duration {
        Duration::from_millis(self.status_clear_delay_ms)
    }
}
