//! 条目提交服务 - 业务能力层
//!
//! 只负责"校验并提交一个新条目"，不负责表单清理和状态提示

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::SubmitError;
use crate::infrastructure::BackendTransport;
use crate::models::{Ack, ErrorBody, SubmissionForm, SubmissionPayload};

/// 后端未给出错误信息时的提示
pub const GENERIC_SUBMIT_FAILURE: &str = "添加失败";

/// 提交控制器
///
/// 职责：
/// - 校验表单并构建请求体
/// - 每次提交只发一个请求，失败不重试
pub struct SubmissionController {
    transport: Arc<dyn BackendTransport>,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn BackendTransport>) -> Self {
        Self { transport }
    }

    /// 校验表单并提交
    pub async fn submit(&self, form: &SubmissionForm) -> Result<Ack, SubmitError> {
        let payload = form.to_payload()?;
        self.send(&payload).await
    }

    /// 提交已校验的请求体
    pub async fn send(&self, payload: &SubmissionPayload) -> Result<Ack, SubmitError> {
        let endpoint = payload.endpoint();
        let raw = self.transport.post_json(endpoint, &payload.to_json()?).await?;

        // 无论状态码如何，响应体都必须是 JSON
        let body: ErrorBody = raw.json(endpoint)?;

        if raw.is_success() {
            info!("✓ 条目已添加 ({})", endpoint);
            return Ok(Ack);
        }

        // 没有可用的 error 字段时使用通用提示
        let message = body
            .error
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| GENERIC_SUBMIT_FAILURE.to_string());

        warn!("⚠️ 添加失败 ({}): HTTP {} {}", endpoint, raw.status, message);

        Err(SubmitError::Rejected {
            status: raw.status,
            message,
        })
    }
}
