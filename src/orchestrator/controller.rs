//! 搜索控制器 - 编排层
//!
//! 把界面事件转成对服务层的调用，并把结果交给状态机和渲染器。
//!
//! ## 职责
//!
//! - 持有结果区状态机和提交状态栏
//! - 搜索失败只替换结果区，提交失败只替换状态栏
//! - 所有错误都在这里落地为渲染内容，不向上抛出

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::SubmitError;
use crate::infrastructure::BackendTransport;
use crate::models::{Ack, SubmissionForm};
use crate::presentation::{Renderer, SearchTrigger};
use crate::services::{SearchAggregator, SubmissionController, VersionProbe};
use crate::utils::logging::truncate_text;
use crate::workflow::{StatusIndicator, SubmissionStatus, ViewState, ViewStateMachine};

/// 搜索控制器
pub struct SearchController {
    aggregator: SearchAggregator,
    submission: SubmissionController,
    version_probe: VersionProbe,
    renderer: Arc<dyn Renderer>,
    view: Mutex<ViewStateMachine>,
    status: StatusIndicator,
}

impl SearchController {
    /// 创建控制器，传输层和渲染器由调用方注入
    pub fn new(
        transport: Arc<dyn BackendTransport>,
        renderer: Arc<dyn Renderer>,
        config: &Config,
    ) -> Self {
        Self {
            aggregator: SearchAggregator::new(transport.clone()),
            submission: SubmissionController::new(transport.clone()),
            version_probe: VersionProbe::new(transport, config.version_path.clone()),
            status: StatusIndicator::new(renderer.clone(), config.status_clear_delay()),
            renderer,
            view: Mutex::new(ViewStateMachine::new()),
        }
    }

    /// 渲染初始占位内容并尝试获取前端版本
    pub async fn start(&self) {
        {
            let view = self.view.lock().await;
            self.renderer.render_view(view.state());
        }
        let version = self.version_probe.fetch().await;
        self.renderer.render_frontend_version(version.as_deref());
    }

    pub async fn view_state(&self) -> ViewState {
        self.view.lock().await.state().clone()
    }

    pub async fn submission_status(&self) -> SubmissionStatus {
        self.status.current().await
    }

    /// 处理按钮点击或回车，返回是否触发了搜索
    pub async fn on_trigger(&self, trigger: SearchTrigger, query: &str) -> bool {
        if !trigger.fires() {
            return false;
        }
        self.on_search(query).await;
        true
    }

    /// 执行一次搜索并更新结果区
    pub async fn on_search(&self, query: &str) {
        let ticket = {
            let mut view = self.view.lock().await;
            let begun = view.begin(query);
            self.renderer.render_view(view.state());
            match begun {
                Ok(ticket) => ticket,
                Err(e) => {
                    debug!("拒绝搜索: {}", e);
                    return;
                }
            }
        };

        info!("🔍 搜索: {}", truncate_text(ticket.query(), 80));

        let result = self.aggregator.search(ticket.query()).await;
        let diagnostics = match &result {
            Ok(outcome) => Some(outcome.diagnostics.clone()),
            Err(e) => {
                warn!("⚠️ 搜索失败: {}", e);
                None
            }
        };

        let mut view = self.view.lock().await;
        if view.settle(ticket, result) {
            self.renderer.render_view(view.state());
            if let Some(diagnostics) = diagnostics {
                self.renderer.render_diagnostics(&diagnostics);
            }
        }
    }

    /// 提交表单
    ///
    /// 成功时清空表单并显示会自动消失的提示；失败时只更新状态栏，表单内容保留。
    pub async fn on_submit(&self, form: &mut SubmissionForm) -> Result<Ack, SubmitError> {
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.status.show_error(e.to_string()).await;
                return Err(e);
            }
        };

        self.status.show_in_progress().await;

        match self.submission.send(&payload).await {
            Ok(ack) => {
                form.clear();
                self.status.show_success().await;
                Ok(ack)
            }
            Err(e) => {
                self.status.show_error(e.to_string()).await;
                Err(e)
            }
        }
    }
}
