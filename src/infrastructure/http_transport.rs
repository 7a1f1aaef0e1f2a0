//! HTTP 传输层 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端资源，只暴露"发请求"的能力

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppResult, ConfigError, TransportError};

/// 原始 HTTP 响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 状态码是否为 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 将响应体反序列化为指定类型
    pub fn json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::decode_failed(endpoint, e))
    }
}

/// 后端传输能力
///
/// 职责：
/// - 只负责把请求送到后端并带回状态码和响应体
/// - 不认识 ResultRecord / SubmissionPayload
/// - 不判断 2xx 之外的业务含义
#[async_trait]
pub trait BackendTransport: Send + Sync {
    /// 发送 GET 请求，`path` 包含查询字符串
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError>;

    /// 发送 JSON 请求体的 POST 请求
    async fn post_json(&self, path: &str, body: &JsonValue) -> Result<RawResponse, TransportError>;
}

/// 基于 reqwest 的传输实现
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// 创建新的传输实例（不设置超时）
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ConfigError::ClientBuildFailed(e.to_string()))?;

        Ok(Self::with_client(client, &config.api_base_url))
    }

    /// 使用已有的客户端创建
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn finish(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<RawResponse, TransportError> {
        let response = request
            .send()
            .await
            .map_err(|e| TransportError::request_failed(path, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::request_failed(path, e))?;

        debug!("{} -> HTTP {} ({} 字节)", path, status, body.len());

        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl BackendTransport for ReqwestTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        debug!("GET {}", self.url(path));
        let request = self
            .client
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json");
        self.finish(path, request).await
    }

    async fn post_json(&self, path: &str, body: &JsonValue) -> Result<RawResponse, TransportError> {
        debug!("POST {} Payload: {}", self.url(path), body);
        // `.json()` 已设置 Content-Type
        self.finish(path, self.client.post(self.url(path)).json(body))
            .await
    }
}
