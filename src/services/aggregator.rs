//! 搜索聚合服务 - 业务能力层
//!
//! 只负责"搜索"能力：并发查询格言和单词两个集合，归一化并合并排序

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::SearchError;
use crate::infrastructure::{BackendTransport, RawResponse};
use crate::models::{
    merge_ranked, BackendDiagnostics, PhraseSearchResponse, ResultRecord, SearchOutcome,
    WordSearchResponse,
};

const PHRASE_ENDPOINT: &str = "/phrase";
const WORD_ENDPOINT: &str = "/word";

/// 校验查询文本，返回去掉首尾空白后的内容
pub fn normalize_query(query: &str) -> Result<&str, SearchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(SearchError::EmptyQuery)
    } else {
        Ok(trimmed)
    }
}

/// 搜索聚合器
///
/// 职责：
/// - 同时向两个后端集合发起查询
/// - 任一请求失败则整体失败，不返回部分结果
/// - 不重试、不超时、不关心渲染
pub struct SearchAggregator {
    transport: Arc<dyn BackendTransport>,
}

impl SearchAggregator {
    pub fn new(transport: Arc<dyn BackendTransport>) -> Self {
        Self { transport }
    }

    /// 执行一次搜索
    ///
    /// # 返回
    /// 按相似度降序排列的结果，以及格言接口附带的诊断信息
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let text = normalize_query(query)?;
        let encoded = urlencoding::encode(text);
        let phrase_path = format!("{}?text={}", PHRASE_ENDPOINT, encoded);
        let word_path = format!("{}?text={}", WORD_ENDPOINT, encoded);

        debug!("并发查询: {} | {}", phrase_path, word_path);

        let (phrase_raw, word_raw) = futures::try_join!(
            self.transport.get(&phrase_path),
            self.transport.get(&word_path)
        )?;

        ensure_success(PHRASE_ENDPOINT, &phrase_raw)?;
        ensure_success(WORD_ENDPOINT, &word_raw)?;

        let phrase_data: PhraseSearchResponse = phrase_raw.json(PHRASE_ENDPOINT)?;
        let word_data: WordSearchResponse = word_raw.json(WORD_ENDPOINT)?;

        let aphorisms: Vec<ResultRecord> = phrase_data
            .phrases
            .into_iter()
            .map(ResultRecord::from_aphorism)
            .collect();
        let words: Vec<ResultRecord> = word_data
            .words
            .into_iter()
            .map(ResultRecord::from_word)
            .collect();

        info!(
            "✓ 搜索完成: {} 条格言, {} 个单词",
            aphorisms.len(),
            words.len()
        );

        Ok(SearchOutcome {
            records: merge_ranked(aphorisms, words),
            diagnostics: BackendDiagnostics {
                backend_version: phrase_data.backend_version,
                backend_id: phrase_data.backend_id,
            },
        })
    }
}

fn ensure_success(endpoint: &str, raw: &RawResponse) -> Result<(), SearchError> {
    if raw.is_success() {
        Ok(())
    } else {
        warn!("⚠️ {} 返回 HTTP {}", endpoint, raw.status);
        Err(SearchError::Backend {
            endpoint: endpoint.to_string(),
            status: raw.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::models::RecordKind;
    use crate::test_support::{phrase_body, word_body, FakeTransport};
    use serde_json::json;
    use std::time::Duration;
    use tokio::sync::Barrier;

    fn aggregator(transport: FakeTransport) -> (SearchAggregator, Arc<FakeTransport>) {
        let transport = Arc::new(transport);
        (SearchAggregator::new(transport.clone()), transport)
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  время  ").unwrap(), "время");
        assert!(matches!(normalize_query(""), Err(SearchError::EmptyQuery)));
        assert!(matches!(normalize_query(" \t\n"), Err(SearchError::EmptyQuery)));
    }

    #[tokio::test]
    async fn test_empty_query_issues_no_requests() {
        let (aggregator, transport) = aggregator(FakeTransport::new());

        let result = aggregator.search("   ").await;

        assert!(matches!(result, Err(SearchError::EmptyQuery)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_issues_two_requests_with_same_encoded_text() {
        let (aggregator, transport) = aggregator(
            FakeTransport::new()
                .respond("GET", "/phrase", 200, phrase_body(&[]))
                .respond("GET", "/word", 200, word_body(&[])),
        );

        aggregator.search(" время лечит ").await.unwrap();

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        let encoded = "%D0%B2%D1%80%D0%B5%D0%BC%D1%8F%20%D0%BB%D0%B5%D1%87%D0%B8%D1%82";
        assert_eq!(
            paths,
            vec![
                format!("/phrase?text={}", encoded),
                format!("/word?text={}", encoded)
            ]
        );
    }

    #[tokio::test]
    async fn test_both_requests_are_in_flight_together() {
        // 两个请求都必须到达屏障，串行执行会卡死
        let barrier = Arc::new(Barrier::new(2));
        let (aggregator, _transport) = aggregator(
            FakeTransport::new()
                .respond("GET", "/phrase", 200, phrase_body(&[]))
                .respond("GET", "/word", 200, word_body(&[]))
                .with_barrier(barrier),
        );

        let result = tokio::time::timeout(Duration::from_secs(5), aggregator.search("q")).await;

        assert!(result.is_ok(), "两个请求没有并发发出");
    }

    #[tokio::test]
    async fn test_merges_and_ranks_results() {
        let (aggregator, _transport) = aggregator(
            FakeTransport::new()
                .respond(
                    "GET",
                    "/phrase",
                    200,
                    phrase_body(&[("p1", "a1", 0.9), ("p2", "a2", 0.5)]),
                )
                .respond("GET", "/word", 200, word_body(&[("w1", "d1", 0.7)])),
        );

        let outcome = aggregator.search("q").await.unwrap();

        let summary: Vec<(RecordKind, &str, f64)> = outcome
            .records
            .iter()
            .map(|r| (r.kind(), r.primary_text(), r.score()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (RecordKind::Aphorism, "p1", 0.9),
                (RecordKind::Word, "w1", 0.7),
                (RecordKind::Aphorism, "p2", 0.5),
            ]
        );
        assert_eq!(outcome.records[0].secondary_text(), "— a1");
        assert_eq!(outcome.diagnostics.version_label(), "v1.0.0-python");
        assert_eq!(outcome.diagnostics.id_label(), "replica-1");
    }

    #[tokio::test]
    async fn test_missing_diagnostics_are_tolerated() {
        let (aggregator, _transport) = aggregator(
            FakeTransport::new()
                .respond("GET", "/phrase", 200, json!({ "phrases": [] }))
                .respond("GET", "/word", 200, json!({})),
        );

        let outcome = aggregator.search("q").await.unwrap();

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.diagnostics, BackendDiagnostics::default());
    }

    #[tokio::test]
    async fn test_word_failure_discards_phrase_results() {
        let (aggregator, _transport) = aggregator(
            FakeTransport::new()
                .respond("GET", "/phrase", 200, phrase_body(&[("p", "a", 0.9)]))
                .respond("GET", "/word", 500, json!({ "error": "Internal server error" })),
        );

        let result = aggregator.search("q").await;

        assert!(matches!(
            result,
            Err(SearchError::Backend { ref endpoint, status: 500 }) if endpoint == "/word"
        ));
    }

    #[tokio::test]
    async fn test_phrase_failure_is_backend_error() {
        let (aggregator, _transport) = aggregator(
            FakeTransport::new()
                .respond("GET", "/phrase", 400, json!({ "error": "Text for search is required" }))
                .respond("GET", "/word", 200, word_body(&[("w", "d", 0.3)])),
        );

        let result = aggregator.search("q").await;

        assert!(matches!(result, Err(SearchError::Backend { status: 400, .. })));
    }

    #[tokio::test]
    async fn test_network_failure_is_transport_error() {
        let (aggregator, _transport) = aggregator(
            FakeTransport::new()
                .respond("GET", "/phrase", 200, phrase_body(&[]))
                .fail("GET", "/word"),
        );

        let result = aggregator.search("q").await;

        assert!(matches!(
            result,
            Err(SearchError::Transport(TransportError::RequestFailed { .. }))
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_error() {
        let (aggregator, _transport) = aggregator(
            FakeTransport::new()
                .respond_raw("GET", "/phrase", 200, "not json")
                .respond("GET", "/word", 200, word_body(&[])),
        );

        let result = aggregator.search("q").await;

        assert!(matches!(
            result,
            Err(SearchError::Transport(TransportError::DecodeFailed { .. }))
        ));
    }
}
