//! Telegram message record and field helpers.
//!
//! Exports written by different Telegram Desktop versions disagree on field
//! types (ids as numbers or strings, `from` as `null`, dates missing on
//! service entries). [`ExportMessage`] therefore keeps every field as an
//! optional [`Value`] and interprets it on access, so an unusual value never
//! turns an otherwise readable object into a decode failure.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::normalize::normalize_name;

/// Format of the `date` field in Telegram exports.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Prefix Telegram puts in front of numeric user ids in `from_id`.
pub const USER_ID_PREFIX: &str = "user";

/// One entry of a conversation's `messages` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportMessage {
    /// Message ID (usually an integer)
    pub id: Option<Value>,
    /// Entry type; only `"message"` is of interest
    #[serde(rename = "type")]
    pub msg_type: Option<Value>,
    /// Local timestamp, passed through verbatim
    pub date: Option<Value>,
    /// Sender display name
    pub from: Option<Value>,
    /// Actor of a service entry
    pub actor: Option<Value>,
    /// Synthetic author id such as `user305696040`
    pub from_id: Option<Value>,
    /// Message text (string or array of strings and entity objects)
    pub text: Option<Value>,
    /// Reply reference
    pub reply_to_message_id: Option<Value>,
}

impl ExportMessage {
    /// Returns `true` for ordinary messages (as opposed to service entries).
    pub fn is_message(&self) -> bool {
        self.msg_type.as_ref().and_then(Value::as_str) == Some("message")
    }

    /// Message id as an integer, if it has one.
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.as_ref().and_then(as_integer)
    }

    /// Id of the replied-to message as an integer, if any.
    pub fn reply_target(&self) -> Option<i64> {
        self.reply_to_message_id.as_ref().and_then(as_integer)
    }

    /// Normalized sender: `from`, else `actor`, else `from_id`.
    pub fn sender(&self) -> String {
        [&self.from, &self.actor, &self.from_id]
            .into_iter()
            .find_map(|field| field.as_ref().and_then(value_text))
            .map(|s| normalize_name(&s))
            .unwrap_or_default()
    }

    /// `from_id` as text, or an empty string.
    pub fn author_id(&self) -> String {
        self.from_id
            .as_ref()
            .and_then(value_text)
            .unwrap_or_default()
    }

    /// `date` as text, or an empty string.
    pub fn date_text(&self) -> String {
        self.date.as_ref().and_then(value_text).unwrap_or_default()
    }

    /// `date` parsed as a local timestamp.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        let date = self.date.as_ref()?.as_str()?;
        NaiveDateTime::parse_from_str(date, DATE_FORMAT).ok()
    }

    /// Flattened text content, untrimmed.
    pub fn flat_text(&self) -> String {
        self.text.as_ref().map(flatten_text).unwrap_or_default()
    }
}

/// Builds the author id string Telegram uses for a numeric user id.
///
/// ```rust
/// use tgsift::parsing::telegram::author_id_for;
///
/// assert_eq!(author_id_for(305696040), "user305696040");
/// ```
pub fn author_id_for(user_id: u64) -> String {
    format!("{USER_ID_PREFIX}{user_id}")
}

/// Extracts text content from Telegram's complex `text` field.
///
/// The `text` field in Telegram exports can be:
/// - A simple string: `"Hello"`
/// - An array with strings and objects: `["Text", {"type": "link", "text": "url"}]`
///
/// Array parts are concatenated in order with no separator.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tgsift::parsing::telegram::flatten_text;
///
/// let complex = json!(["see ", {"type": "link", "text": "here"}, " now"]);
/// assert_eq!(flatten_text(&complex), "see here now");
/// ```
pub fn flatten_text(text_value: &Value) -> String {
    match text_value {
        Value::String(s) => s.clone(),
        Value::Array(arr) => arr
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.as_str()),
                Value::Object(obj) => obj.get("text").and_then(Value::as_str),
                _ => None,
            })
            .collect::<String>(),
        _ => String::new(),
    }
}

/// Renders a scalar as text; `null`, empty strings and containers give `None`.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// 2^63; every integral f64 in [-2^63, 2^63) fits an i64 exactly.
const I64_RANGE_F64: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && (-I64_RANGE_F64..I64_RANGE_F64).contains(f))
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
