//! 后端接口的响应结构

use serde::{Deserialize, Serialize};

/// `GET /phrase` 响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhraseSearchResponse {
    #[serde(default)]
    pub phrases: Vec<PhraseHit>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub backend_version: Option<String>,
    #[serde(default, deserialize_with = "deserialize_label")]
    pub backend_id: Option<String>,
}

/// 格言搜索命中项
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhraseHit {
    pub phrase: String,
    pub author: String,
    #[serde(default)]
    pub description: Option<String>,
    pub similarity_score: f64,
}

/// `GET /word` 响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordSearchResponse {
    #[serde(default)]
    pub words: Vec<WordHit>,
}

/// 单词搜索命中项
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WordHit {
    pub word: String,
    pub description: String,
    pub similarity_score: f64,
}

/// 后端错误响应体 `{error}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /version.json` 响应
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionInfo {
    #[serde(default, deserialize_with = "deserialize_label")]
    pub frontend_version: Option<String>,
}

// 版本号和副本 ID 可能是字符串也可能是数字，空字符串视为缺失
fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct LabelVisitor;

    impl<'de> Visitor<'de> for LabelVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, a number or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if value.is_empty() {
                Ok(None)
            } else {
                Ok(Some(value.to_string()))
            }
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(LabelVisitor)
}
