//! Log sanitization utilities
//!
//! Keeps API keys and oversized response bodies out of debug/error logs.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of trailing characters of a secret left visible.
const SECRET_VISIBLE_SUFFIX: usize = 4;

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer ones keep the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) plus a note with the full length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret, keeping only its last few characters.
///
/// `"abcdef123456"` becomes `"********3456"`; secrets too short to reveal
/// anything are fully masked.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= SECRET_VISIBLE_SUFFIX * 2 {
        return "*".repeat(count);
    }
    let visible: String = secret.chars().skip(count - SECRET_VISIBLE_SUFFIX).collect();
    format!("{}{visible}", "*".repeat(count - SECRET_VISIBLE_SUFFIX))
}
