//! 提交状态提示
//!
//! 与结果区状态机相互独立：`Idle → InProgress → Success | Error`。
//! 成功提示在固定延迟后自动清除，清除前若状态已被更新则不动。

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use crate::presentation::Renderer;

/// 提交状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    InProgress,
    Success,
    Error(String),
}

impl SubmissionStatus {
    /// 状态栏文本
    pub fn message(&self) -> &str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::InProgress => "正在添加...",
            SubmissionStatus::Success => "添加成功！",
            SubmissionStatus::Error(msg) => msg,
        }
    }
}

#[derive(Debug)]
struct StatusSlot {
    status: SubmissionStatus,
    epoch: u64,
}

/// 状态提示器
#[derive(Clone)]
pub struct StatusIndicator {
    slot: Arc<Mutex<StatusSlot>>,
    renderer: Arc<dyn Renderer>,
    clear_after: Duration,
}

impl StatusIndicator {
    pub fn new(renderer: Arc<dyn Renderer>, clear_after: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(StatusSlot {
                status: SubmissionStatus::Idle,
                epoch: 0,
            })),
            renderer,
            clear_after,
        }
    }

    pub async fn current(&self) -> SubmissionStatus {
        self.slot.lock().await.status.clone()
    }

    pub async fn show_in_progress(&self) {
        self.set(SubmissionStatus::InProgress).await;
    }

    pub async fn show_error(&self, message: impl Into<String>) {
        self.set(SubmissionStatus::Error(message.into())).await;
    }

    /// 显示成功提示，并在延迟后自动清除
    pub async fn show_success(&self) {
        let epoch = self.set(SubmissionStatus::Success).await;

        let indicator = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(indicator.clear_after).await;
            let mut slot = indicator.slot.lock().await;
            if slot.epoch != epoch {
                debug!("状态已更新，跳过自动清除");
                return;
            }
            slot.status = SubmissionStatus::Idle;
            indicator.renderer.render_status(&slot.status);
        });
    }

    async fn set(&self, status: SubmissionStatus) -> u64 {
        let mut slot = self.slot.lock().await;
        slot.epoch += 1;
        slot.status = status;
        self.renderer.render_status(&slot.status);
        slot.epoch
    }
}
