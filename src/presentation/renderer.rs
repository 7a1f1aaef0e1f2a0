use crate::models::BackendDiagnostics;
use crate::workflow::{SubmissionStatus, ViewState};

/// 渲染能力
///
/// 控制器通过构造函数注入，核心逻辑不依赖任何具体的显示界面
pub trait Renderer: Send + Sync {
    /// 替换结果区内容
    fn render_view(&self, state: &ViewState);

    /// 更新后端版本和副本 ID
    fn render_diagnostics(&self, diagnostics: &BackendDiagnostics);

    /// 只替换提交状态栏，不影响结果区
    fn render_status(&self, status: &SubmissionStatus);

    fn render_frontend_version(&self, version: Option<&str>);
}

/// 触发搜索的用户动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTrigger {
    /// 点击搜索按钮
    Click,
    /// 在输入框中按下回车
    Enter { shift: bool },
}

impl SearchTrigger {
    /// Shift+Enter 用于换行，不触发搜索
    pub fn fires(self) -> bool {
        match self {
            SearchTrigger::Click => true,
            SearchTrigger::Enter { shift } => !shift,
        }
    }
}
