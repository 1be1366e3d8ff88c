//! Utility modules.

/// Log sanitization utilities to keep API keys and large bodies out of logs.
pub mod log_sanitizer;
