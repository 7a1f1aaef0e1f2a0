//! 新条目提交的数据结构与校验

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{SubmitError, TransportError};

/// 条目类型选择器
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryKind {
    #[default]
    Aphorism,
    Word,
}

/// 格言输入（已校验）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AphorismInput {
    pub phrase: String,
    pub author: String,
    pub description: String,
}

impl AphorismInput {
    /// 描述为空时的占位值，后端要求该字段非空
    pub const BLANK_DESCRIPTION: &'static str = " ";

    /// 校验并构建：正文和作者必填，描述可选
    pub fn validate(phrase: &str, author: &str, description: &str) -> Result<Self, SubmitError> {
        let phrase = phrase.trim();
        let author = author.trim();
        let description = description.trim();

        let mut missing = Vec::new();
        if phrase.is_empty() {
            missing.push("phrase");
        }
        if author.is_empty() {
            missing.push("author");
        }
        if !missing.is_empty() {
            return Err(SubmitError::missing(missing));
        }

        Ok(Self {
            phrase: phrase.to_string(),
            author: author.to_string(),
            description: if description.is_empty() {
                Self::BLANK_DESCRIPTION.to_string()
            } else {
                description.to_string()
            },
        })
    }
}

/// 单词输入（已校验）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordInput {
    pub word: String,
    pub description: String,
}

impl WordInput {
    /// 校验并构建：单词和释义都必填
    pub fn validate(word: &str, description: &str) -> Result<Self, SubmitError> {
        let word = word.trim();
        let description = description.trim();

        let mut missing = Vec::new();
        if word.is_empty() {
            missing.push("word");
        }
        if description.is_empty() {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(SubmitError::missing(missing));
        }

        Ok(Self {
            word: word.to_string(),
            description: description.to_string(),
        })
    }
}

/// 一次提交的请求体，序列化为对应输入的字段本身
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubmissionPayload {
    Aphorism(AphorismInput),
    Word(WordInput),
}

impl SubmissionPayload {
    /// 对应的后端接口
    pub fn endpoint(&self) -> &'static str {
        match self {
            SubmissionPayload::Aphorism(_) => "/phrase",
            SubmissionPayload::Word(_) => "/word",
        }
    }

    pub fn to_json(&self) -> Result<JsonValue, TransportError> {
        serde_json::to_value(self).map_err(|e| TransportError::encode_failed(self.endpoint(), e))
    }
}

/// 后端确认写入
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

/// 添加条目的表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub kind: EntryKind,
    pub phrase: String,
    pub author: String,
    pub phrase_description: String,
    pub word: String,
    pub word_description: String,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换类型选择器，两组字段内容都保留
    pub fn select_kind(&mut self, kind: EntryKind) {
        self.kind = kind;
    }

    /// 当前可见的字段组
    pub fn visible_group(&self) -> EntryKind {
        self.kind
    }

    /// 按当前类型校验表单
    pub fn to_payload(&self) -> Result<SubmissionPayload, SubmitError> {
        match self.kind {
            EntryKind::Aphorism => {
                AphorismInput::validate(&self.phrase, &self.author, &self.phrase_description)
                    .map(SubmissionPayload::Aphorism)
            }
            EntryKind::Word => WordInput::validate(&self.word, &self.word_description)
                .map(SubmissionPayload::Word),
        }
    }

    /// 提交成功后清空所有输入字段，类型选择保持不变
    pub fn clear(&mut self) {
        self.phrase.clear();
        self.author.clear();
        self.phrase_description.clear();
        self.word.clear();
        self.word_description.clear();
    }
}
