//! 测试辅助工具：脚本化的传输层和记录型渲染器

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tokio::sync::Barrier;

use crate::error::TransportError;
use crate::infrastructure::{BackendTransport, RawResponse};
use crate::models::BackendDiagnostics;
use crate::presentation::Renderer;
use crate::workflow::{SubmissionStatus, ViewState};

/// 记录下来的请求
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub body: Option<JsonValue>,
}

/// 按 "方法 + 路由" 返回预设响应的传输层
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<(&'static str, String), RawResponse>,
    failures: Vec<(&'static str, String)>,
    delays: Vec<(String, Duration)>,
    barrier: Option<Arc<Barrier>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: &'static str, route: &str, status: u16, body: JsonValue) -> Self {
        self.respond_raw(method, route, status, body.to_string())
    }

    pub fn respond_raw(
        mut self,
        method: &'static str,
        route: &str,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.routes
            .insert((method, route.to_string()), RawResponse::new(status, body));
        self
    }

    /// 该路由返回网络错误
    pub fn fail(mut self, method: &'static str, route: &str) -> Self {
        self.failures.push((method, route.to_string()));
        self
    }

    /// 路径中包含 `fragment` 的请求延迟 `delay` 后返回
    pub fn delay_matching(mut self, fragment: &str, delay: Duration) -> Self {
        self.delays.push((fragment.to_string(), delay));
        self
    }

    /// 每个请求在返回前都等待屏障
    pub fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    async fn dispatch(
        &self,
        method: &'static str,
        path: &str,
        body: Option<JsonValue>,
    ) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let delay = self
            .delays
            .iter()
            .find(|(fragment, _)| path.contains(fragment.as_str()))
            .map(|(_, delay)| *delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let route = path.split('?').next().unwrap_or(path).to_string();
        if self.failures.contains(&(method, route.clone())) {
            return Err(TransportError::request_failed(route, "connection refused"));
        }

        Ok(self
            .routes
            .get(&(method, route))
            .cloned()
            .unwrap_or_else(|| RawResponse::new(404, "")))
    }
}

#[async_trait]
impl BackendTransport for FakeTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        self.dispatch("GET", path, None).await
    }

    async fn post_json(&self, path: &str, body: &JsonValue) -> Result<RawResponse, TransportError> {
        self.dispatch("POST", path, Some(body.clone())).await
    }
}

/// 渲染事件
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    View(ViewState),
    Diagnostics(BackendDiagnostics),
    Status(SubmissionStatus),
    FrontendVersion(Option<String>),
}

/// 记录所有渲染调用的渲染器
#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn views(&self) -> Vec<ViewState> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::View(view) => Some(view),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<SubmissionStatus> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                RenderEvent::Status(status) => Some(status),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn render_view(&self, state: &ViewState) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::View(state.clone()));
    }

    fn render_diagnostics(&self, diagnostics: &BackendDiagnostics) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::Diagnostics(diagnostics.clone()));
    }

    fn render_status(&self, status: &SubmissionStatus) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::Status(status.clone()));
    }

    fn render_frontend_version(&self, version: Option<&str>) {
        self.events
            .lock()
            .unwrap()
            .push(RenderEvent::FrontendVersion(version.map(str::to_string)));
    }
}

/// 标准的格言接口响应
pub fn phrase_body(hits: &[(&str, &str, f64)]) -> JsonValue {
    let phrases: Vec<JsonValue> = hits
        .iter()
        .map(|(phrase, author, score)| {
            serde_json::json!({
                "phrase": phrase,
                "author": author,
                "description": null,
                "similarity_score": score
            })
        })
        .collect();
    serde_json::json!({
        "phrases": phrases,
        "backend_version": "v1.0.0-python",
        "backend_id": "replica-1"
    })
}

/// 标准的单词接口响应
pub fn word_body(hits: &[(&str, &str, f64)]) -> JsonValue {
    let words: Vec<JsonValue> = hits
        .iter()
        .map(|(word, description, score)| {
            serde_json::json!({
                "word": word,
                "description": description,
                "similarity_score": score
            })
        })
        .collect();
    serde_json::json!({ "words": words })
}
