//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `controller` - 搜索控制器
//! - 把搜索/提交事件分发给服务层
//! - 驱动结果区状态机和提交状态栏
//! - 把所有错误落地为渲染内容
//!
//! ### `app` - 终端应用
//! - 管理应用生命周期（初始化、运行）
//! - 持有传输层和渲染器
//! - 逐行读取输入并分发事件
//!
//! ## 层次关系
//!
//! ```text
//! app (终端输入)
//!     ↓
//! controller (界面事件)
//!     ↓
//! workflow (状态机 / 状态栏)   services (搜索 / 提交 / 版本)
//!                                   ↓
//!                     infrastructure (BackendTransport)
//! ```

pub mod app;
pub mod controller;

pub use app::{parse_command, App, Command};
pub use controller::SearchController;
