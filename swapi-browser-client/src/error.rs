//! Unified error type definition

use thiserror::Error;

/// Error type for every SWAPI request.
///
/// All variants are flavours of the same user-facing failure ("the page could
/// not be fetched"); the distinction exists for logging and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The HTTP request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The API answered with a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code returned by the API.
        status: u16,
        /// Response body (truncated for display).
        body: String,
    },

    /// Failed to parse the API response.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// 是否为预期行为（例如页码越界返回 404），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 404, .. })
    }
}

/// Library result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network() {
        let e = ClientError::Network("connection refused".into());
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_http_status() {
        let e = ClientError::HttpStatus {
            status: 404,
            body: r#"{"detail":"Not found"}"#.into(),
        };
        assert_eq!(e.to_string(), r#"HTTP 404: {"detail":"Not found"}"#);
    }

    #[test]
    fn not_found_is_expected() {
        let e = ClientError::HttpStatus {
            status: 404,
            body: String::new(),
        };
        assert!(e.is_expected());
    }

    #[test]
    fn server_error_is_not_expected() {
        let e = ClientError::HttpStatus {
            status: 500,
            body: String::new(),
        };
        assert!(!e.is_expected());
        assert!(!ClientError::Parse("eof".into()).is_expected());
        assert!(!ClientError::Timeout("30s".into()).is_expected());
    }
}
