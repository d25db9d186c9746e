//! Utility modules.

/// Log sanitization utilities to keep bodies short and tokens out of logs.
pub mod log_sanitizer;
