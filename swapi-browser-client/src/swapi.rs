//! SWAPI people endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ClientError, Result};
use crate::http_client::{HttpUtils, is_success};
use crate::traits::PeopleSource;
use crate::types::{PageNumber, PeoplePage};
use crate::utils::log_sanitizer::truncate_for_log;

/// Public SWAPI base URL
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// SWAPI 每页固定返回的人物数量
pub const PAGE_SIZE: usize = 10;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("[swapi] Falling back to default HTTP client: {e}");
            Client::new()
        })
}

/// HTTP client for the SWAPI `people` endpoint
pub struct SwapiClient {
    client: Client,
    base_url: String,
}

impl SwapiClient {
    /// Client against the public API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against another deployment (a mirror, or a local test server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: create_http_client(),
            base_url,
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of one page of people
    pub fn people_url(&self, page: PageNumber) -> String {
        format!("{}/people/?page={page}", self.base_url)
    }
}

impl Default for SwapiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PeopleSource for SwapiClient {
    fn id(&self) -> &'static str {
        "swapi"
    }

    async fn fetch_page(&self, page: PageNumber) -> Result<PeoplePage> {
        let url = self.people_url(page);
        let (status, body) = HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;

        if !is_success(status) {
            return Err(ClientError::HttpStatus {
                status,
                body: truncate_for_log(&body),
            });
        }

        let people: PeoplePage = HttpUtils::parse_json(&body)?;

        for character in &people.results {
            let missing = character.missing_fields();
            if !missing.is_empty() {
                log::warn!(
                    "[swapi] page {page}: \"{}\" is missing fields: {}",
                    character.display_name(),
                    missing.join(", ")
                );
            }
            let unknown = character.unknown_fields();
            if !unknown.is_empty() {
                log::warn!(
                    "[swapi] page {page}: \"{}\" has unknown fields: {}",
                    character.display_name(),
                    unknown.join(", ")
                );
            }
        }

        log::debug!(
            "[swapi] page {page}: {} results, count={:?}, next={:?}",
            people.results.len(),
            people.count,
            people.next
        );

        Ok(people)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn people_url_default() {
        let client = SwapiClient::new();
        assert_eq!(
            client.people_url(PageNumber::first()),
            "https://swapi.dev/api/people/?page=1"
        );
    }

    #[test]
    fn people_url_strips_trailing_slash() {
        let client = SwapiClient::with_base_url("http://127.0.0.1:8080/api/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/api");
        assert_eq!(
            client.people_url(PageNumber::first().next()),
            "http://127.0.0.1:8080/api/people/?page=2"
        );
    }
}
