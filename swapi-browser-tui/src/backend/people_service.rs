//! 人物服务
//!
//! 封装 swapi-browser-client，把请求失败转换为“空列表 + 失败描述”

use std::sync::Arc;

use swapi_browser_client::{Character, PageNumber, PeopleSource};
use tokio::sync::mpsc::UnboundedSender;

use crate::message::AppMessage;

/// 一次页面请求的结果
///
/// 失败时 `records` 为空，`failure` 为可展示给用户的描述。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub records: Vec<Character>,
    pub failure: Option<String>,
}

/// 人物服务
#[derive(Clone)]
pub struct PeopleService {
    source: Arc<dyn PeopleSource>,
}

impl PeopleService {
    pub fn new(source: Arc<dyn PeopleSource>) -> Self {
        Self { source }
    }

    /// 获取指定页
    ///
    /// 不返回错误：失败被记录到日志并折叠进 [`FetchOutcome::failure`]。
    pub async fn fetch(&self, page: PageNumber) -> FetchOutcome {
        match self.source.fetch_page(page).await {
            Ok(people) => FetchOutcome {
                records: people.results,
                failure: None,
            },
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[{}] 第 {page} 页获取失败: {e}", self.source.id());
                } else {
                    log::error!("[{}] 第 {page} 页获取失败: {e}", self.source.id());
                }
                FetchOutcome {
                    records: Vec::new(),
                    failure: Some(e.to_string()),
                }
            }
        }
    }

    /// 在后台获取指定页，完成后把结果发送回主循环
    pub fn spawn_fetch(&self, page: PageNumber, generation: u64, tx: UnboundedSender<AppMessage>) {
        let service = self.clone();
        tokio::spawn(async move {
            let outcome = service.fetch(page).await;
            if tx
                .send(AppMessage::PageFetched {
                    generation,
                    page,
                    outcome,
                })
                .is_err()
            {
                log::debug!("第 {page} 页结果被丢弃：主循环已退出");
            }
        });
    }
}
