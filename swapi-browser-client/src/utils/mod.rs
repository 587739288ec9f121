//! Utility modules.

/// Date/time parsing and formatting helpers.
pub mod datetime;

/// Keeps response bodies from flooding debug logs.
pub mod log_sanitizer;
