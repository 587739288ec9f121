//! Generic HTTP client tools
//!
//! Sending the request, logging, and mapping transport failures live here so
//! that the SWAPI client only deals with URLs and response types.
//!
//! # design principles
//! - **Single attempt** - a request is sent exactly once, failures are returned as-is
//! - **Status is data** - the caller decides which status codes are errors
//! - **Bodies are logged truncated** - see [`truncate_for_log`]

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, etc.)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - status code and body text, for any status
    /// * `Err(ClientError::Network | ClientError::Timeout)` - the request never produced a response
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("[swapi] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(e.to_string())
            } else {
                ClientError::Network(e.to_string())
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[swapi] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to read response body: {e}")))?;

        log::debug!("[swapi] Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::Parse)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[swapi] JSON parse failed: {e}");
            log::error!("[swapi] Raw response: {}", truncate_for_log(response_text));
            ClientError::Parse(e.to_string())
        })
    }
}

/// Whether a status code counts as success
pub fn is_success(status_code: u16) -> bool {
    (200..300).contains(&status_code)
}
