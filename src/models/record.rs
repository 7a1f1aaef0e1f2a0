//! 统一结果记录
//!
//! 格言和单词两个来源的命中项都被归一化为 [`ResultRecord`]

use serde::Serialize;

use crate::models::wire::{PhraseHit, WordHit};

/// 结果来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordKind {
    Aphorism,
    Word,
}

/// 归一化后的搜索结果，创建后不可修改
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    kind: RecordKind,
    primary_text: String,
    secondary_text: String,
    note: Option<String>,
    score: f64,
}

impl ResultRecord {
    /// 格言: 正文 + "— 作者" + 可选出处
    pub fn from_aphorism(hit: PhraseHit) -> Self {
        Self {
            kind: RecordKind::Aphorism,
            primary_text: hit.phrase,
            secondary_text: format!("— {}", hit.author),
            note: hit.description.filter(|d| !d.trim().is_empty()),
            score: hit.similarity_score,
        }
    }

    /// 单词: 词 + 释义，没有备注
    pub fn from_word(hit: WordHit) -> Self {
        Self {
            kind: RecordKind::Word,
            primary_text: hit.word,
            secondary_text: hit.description,
            note: None,
            score: hit.similarity_score,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn primary_text(&self) -> &str {
        &self.primary_text
    }

    pub fn secondary_text(&self) -> &str {
        &self.secondary_text
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl std::fmt::Display for ResultRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} [相似度: {:.1}%]",
            self.primary_text,
            self.secondary_text,
            self.score * 100.0
        )
    }
}

/// 后端诊断信息，只由格言接口返回
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendDiagnostics {
    pub backend_version: Option<String>,
    pub backend_id: Option<String>,
}

impl BackendDiagnostics {
    pub const PLACEHOLDER: &'static str = "-";

    pub fn version_label(&self) -> &str {
        self.backend_version.as_deref().unwrap_or(Self::PLACEHOLDER)
    }

    pub fn id_label(&self) -> &str {
        self.backend_id.as_deref().unwrap_or(Self::PLACEHOLDER)
    }
}

/// 一次搜索的完整结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub records: Vec<ResultRecord>,
    pub diagnostics: BackendDiagnostics,
}

/// 合并两个来源并按相似度降序排列
///
/// 格言在前、单词在后拼接，再做稳定排序，所以相同分数时格言排在单词前面。
/// 分数原样保留，不做截断。
pub fn merge_ranked(aphorisms: Vec<ResultRecord>, words: Vec<ResultRecord>) -> Vec<ResultRecord> {
    let mut merged = aphorisms;
    merged.extend(words);
    merged.sort_by(|a, b| b.score.total_cmp(&a.score));
    merged
}
