//! Name normalization for senders, chat names and queries.
//!
//! Telegram writes names with no-break and thin spaces, and sometimes with
//! styled letters (mathematical bold, fullwidth forms). Operators type plain
//! ones. Every name comparison goes through [`normalize_name`] on both sides.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// `\s` is Unicode-aware, so this also covers U+00A0, U+2009 and U+202F.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Applies NFKC, collapses every run of Unicode whitespace to one ASCII space
/// and trims.
///
/// ```rust
/// use tgsift::core::normalize::normalize_name;
///
/// assert_eq!(normalize_name("  42\u{00A0}ИП\u{202F} Куратор "), "42 ИП Куратор");
/// assert_eq!(normalize_name("𝐀𝐧𝐧𝐚"), "Anna");
/// ```
pub fn normalize_name(s: &str) -> String {
    let composed: String = s.nfkc().collect();
    WHITESPACE_RUN.replace_all(&composed, " ").trim().to_string()
}

/// Normalized and lowercased form used for case-insensitive comparisons.
pub fn fold(s: &str) -> String {
    normalize_name(s).to_lowercase()
}
