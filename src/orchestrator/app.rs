//! 终端应用 - 编排层
//!
//! ## 职责
//!
//! - 初始化传输层、渲染器和控制器
//! - 逐行读取标准输入，把每行转成一个界面事件
//! - 搜索在后台任务中执行，新搜索不等待旧搜索完成
//!
//! ## 输入格式
//!
//! ```text
//! 任意文本                  搜索
//! :phrase 正文 | 作者 | 描述  添加格言（描述可省略）
//! :word 单词 | 释义          添加单词
//! :quit                     退出
//! ```

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::config::Config;
use crate::infrastructure::ReqwestTransport;
use crate::models::{EntryKind, SubmissionForm};
use crate::orchestrator::controller::SearchController;
use crate::presentation::{SearchTrigger, TerminalRenderer};
use crate::utils::logging::log_startup;

/// 一行输入对应的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    AddPhrase {
        phrase: String,
        author: String,
        description: String,
    },
    AddWord {
        word: String,
        description: String,
    },
    Quit,
}

/// 解析一行输入
pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.trim() == ":quit" {
        return Command::Quit;
    }

    if let Some(rest) = line.strip_prefix(":phrase") {
        let mut parts = rest.splitn(3, '|').map(|s| s.trim().to_string());
        return Command::AddPhrase {
            phrase: parts.next().unwrap_or_default(),
            author: parts.next().unwrap_or_default(),
            description: parts.next().unwrap_or_default(),
        };
    }

    if let Some(rest) = line.strip_prefix(":word") {
        let mut parts = rest.splitn(2, '|').map(|s| s.trim().to_string());
        return Command::AddWord {
            word: parts.next().unwrap_or_default(),
            description: parts.next().unwrap_or_default(),
        };
    }

    Command::Search(line.to_string())
}

/// 应用主结构
pub struct App {
    controller: Arc<SearchController>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let transport = Arc::new(ReqwestTransport::new(&config)?);
        let renderer = Arc::new(TerminalRenderer::stdout());
        let controller = Arc::new(SearchController::new(transport, renderer, &config));

        Ok(Self { controller })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        self.controller.start().await;

        let mut form = SubmissionForm::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            match parse_command(&line) {
                Command::Quit => break,
                Command::Search(query) => {
                    let controller = self.controller.clone();
                    tokio::spawn(async move {
                        controller
                            .on_trigger(SearchTrigger::Enter { shift: false }, &query)
                            .await;
                    });
                }
                Command::AddPhrase {
                    phrase,
                    author,
                    description,
                } => {
                    form.select_kind(EntryKind::Aphorism);
                    form.phrase = phrase;
                    form.author = author;
                    form.phrase_description = description;
                    // 结果已渲染到状态栏
                    let _ = self.controller.on_submit(&mut form).await;
                }
                Command::AddWord { word, description } => {
                    form.select_kind(EntryKind::Word);
                    form.word = word;
                    form.word_description = description;
                    let _ = self.controller.on_submit(&mut form).await;
                }
            }
            debug!("等待下一条输入");
        }

        info!("👋 程序结束");
        Ok(())
    }
}
