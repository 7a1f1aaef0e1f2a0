//! 终端渲染器
//!
//! 把结果卡片、状态栏和版本信息输出为纯文本

use std::io::Write;
use std::sync::Mutex;

use tracing::warn;

use crate::models::{BackendDiagnostics, RecordKind, ResultRecord};
use crate::presentation::Renderer;
use crate::workflow::{SubmissionStatus, ViewState};

pub struct TerminalRenderer {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalRenderer {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(std::io::stdout()))
    }

    pub fn with_writer(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn emit(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            warn!("终端输出锁已损坏");
            return;
        };
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            warn!("写入终端失败: {}", e);
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render_view(&self, state: &ViewState) {
        self.emit(&format_view(state));
    }

    fn render_diagnostics(&self, diagnostics: &BackendDiagnostics) {
        self.emit(&format!(
            "后端版本: {} | 副本: {}",
            diagnostics.version_label(),
            diagnostics.id_label()
        ));
    }

    fn render_status(&self, status: &SubmissionStatus) {
        match status {
            SubmissionStatus::Idle => {}
            SubmissionStatus::Error(msg) => self.emit(&format!("✗ {}", msg)),
            other => self.emit(other.message()),
        }
    }

    fn render_frontend_version(&self, version: Option<&str>) {
        self.emit(&format!(
            "前端版本: {}",
            version.unwrap_or(BackendDiagnostics::PLACEHOLDER)
        ));
    }
}

/// 结果区文本
pub fn format_view(state: &ViewState) -> String {
    match state {
        ViewState::Idle => [
            "输入文本后回车进行搜索",
            "例如: \"время лечит\", \"опытный человек\", \"любовь\"",
        ]
        .join("\n"),
        ViewState::Loading { .. } => "正在搜索相似的格言和单词...".to_string(),
        ViewState::Empty { .. } => "没有找到相似的格言或单词".to_string(),
        ViewState::Error(msg) => msg.clone(),
        ViewState::Results { query, records } => {
            let mut lines = vec![
                format!("找到 {} 条结果: \"{}\"", records.len(), query),
                "─".repeat(40),
            ];
            lines.extend(records.iter().map(format_card));
            lines.join("\n")
        }
    }
}

/// 单条结果卡片
pub fn format_card(record: &ResultRecord) -> String {
    let similarity = format!("相似度: {:.1}%", record.score() * 100.0);
    match record.kind() {
        RecordKind::Aphorism => {
            let mut card = vec![
                "[格言]".to_string(),
                format!("\"{}\"", record.primary_text()),
                record.secondary_text().to_string(),
            ];
            if let Some(note) = record.note() {
                card.push(format!("({})", note));
            }
            card.push(similarity);
            card.join("\n")
        }
        RecordKind::Word => [
            "[单词]".to_string(),
            record.primary_text().to_string(),
            record.secondary_text().to_string(),
            similarity,
        ]
        .join("\n"),
    }
}
