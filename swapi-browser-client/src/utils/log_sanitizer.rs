//! Log sanitization utilities
//!
//! SWAPI pages run to several kilobytes; only a prefix is worth logging.

/// Maximum number of bytes of a body included in log output.
const LOG_BODY_LIMIT: usize = 512;

/// Truncate a string for logging.
///
/// Strings within [`LOG_BODY_LIMIT`] bytes are returned unchanged; longer ones
/// are cut at the last char boundary before the limit and suffixed with the
/// total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
