//! 结果区状态机 - 流程层
//!
//! `Idle → Loading → {Empty | Error | Results}`，每次新搜索都回到 `Loading`。
//!
//! 每次触发搜索都会领取一个递增的代号，只有最新代号的结果才会被应用，
//! 较早发出但较晚返回的搜索结果会被丢弃。

use tracing::debug;

use crate::error::SearchError;
use crate::models::{ResultRecord, SearchOutcome};
use crate::services::normalize_query;

/// 结果区的显示状态
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading { query: String },
    Empty { query: String },
    Error(String),
    Results {
        query: String,
        records: Vec<ResultRecord>,
    },
}

/// 一次搜索的凭据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug)]
pub struct ViewStateMachine {
    state: ViewState,
    generation: u64,
}

impl ViewStateMachine {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// 触发一次搜索
    ///
    /// 非空查询进入 `Loading` 并返回凭据；空查询直接进入 `Error`，
    /// 同时作废所有仍在进行中的搜索。
    pub fn begin(&mut self, query: &str) -> Result<SearchTicket, SearchError> {
        self.generation += 1;

        let text = match normalize_query(query) {
            Ok(text) => text.to_string(),
            Err(e) => {
                self.state = ViewState::Error(error_message(&e));
                return Err(e);
            }
        };

        self.state = ViewState::Loading {
            query: text.clone(),
        };

        Ok(SearchTicket {
            generation: self.generation,
            query: text,
        })
    }

    /// 应用搜索结果，过期的凭据返回 false 且不改变状态
    pub fn settle(
        &mut self,
        ticket: SearchTicket,
        result: Result<SearchOutcome, SearchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "丢弃过期的搜索结果: 代号 {} (当前 {})",
                ticket.generation, self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(outcome) if outcome.records.is_empty() => ViewState::Empty {
                query: ticket.query,
            },
            Ok(outcome) => ViewState::Results {
                query: ticket.query,
                records: outcome.records,
            },
            Err(e) => ViewState::Error(error_message(&e)),
        };
        true
    }
}

impl Default for ViewStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// 结果区显示的错误文本
pub fn error_message(err: &SearchError) -> String {
    match err {
        SearchError::EmptyQuery => err.to_string(),
        _ => format!("错误: {}", err),
    }
}
