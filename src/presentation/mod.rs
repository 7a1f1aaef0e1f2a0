//! 展示适配层
//!
//! 渲染能力的抽象和终端实现，核心流程只依赖 [`Renderer`] trait

pub mod renderer;
pub mod terminal;

pub use renderer::{Renderer, SearchTrigger};
pub use terminal::TerminalRenderer;
