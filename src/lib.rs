//! # Aphorism Search
//!
//! 格言与单词相似度搜索的客户端控制器
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有 HTTP 客户端，只暴露 `get` / `post_json` 能力
//!
//! ### ② 业务能力层（Services）
//! - `SearchAggregator` - 并发查询两个集合，合并并按相似度排序
//! - `SubmissionController` - 校验并提交新的格言或单词
//! - `VersionProbe` - 尽力获取前端版本
//!
//! ### ③ 流程层（Workflow）
//! - `ViewStateMachine` - 结果区状态 `Idle → Loading → Empty | Error | Results`
//! - `StatusIndicator` - 提交状态栏，成功提示自动清除
//!
//! ### ④ 编排层（Orchestration）
//! - `SearchController` - 把界面事件接到服务层和状态机上
//! - `App` - 终端适配器
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod presentation;
pub mod services;
pub mod utils;
pub mod workflow;

#[cfg(test)]
mod test_support;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, SearchError, SubmitError, TransportError};
pub use infrastructure::{BackendTransport, RawResponse, ReqwestTransport};
pub use models::{RecordKind, ResultRecord, SearchOutcome, SubmissionForm, SubmissionPayload};
pub use orchestrator::{App, SearchController};
pub use presentation::{Renderer, SearchTrigger, TerminalRenderer};
pub use services::{SearchAggregator, SubmissionController, VersionProbe};
pub use workflow::{StatusIndicator, SubmissionStatus, ViewState, ViewStateMachine};
