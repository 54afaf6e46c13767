//! Core data models shared by the extraction pipeline and the writers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a discovered conversation, without its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Numeric chat id, if one was found
    pub id: Option<u64>,
    /// Display name (or a placeholder)
    pub name: String,
}

impl fmt::Display for ConversationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{} [id={id}]", self.name),
            None => write!(f, "{} [id=None]", self.name),
        }
    }
}

/// One matched message together with the message it replies to.
///
/// Every column is already rendered as text; reply fields are empty when
/// there is no reply or the target could not be found. Whether the target was
/// found is kept in [`OutputRow::reply_found`], which is not a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    /// Conversation display name
    pub chat: String,
    /// Message id as written in the export
    pub id: String,
    /// Message date, verbatim
    pub date: String,
    /// Normalized sender name
    pub from: String,
    /// Author id string (`user123...`)
    pub from_id: String,
    /// Flattened, trimmed text
    pub text: String,
    /// Referenced message id, even when it could not be resolved
    pub reply_to_id: String,
    /// Sender of the replied-to message
    pub reply_from: String,
    /// Date of the replied-to message
    pub reply_date: String,
    /// Flattened, trimmed text of the replied-to message
    pub reply_text: String,
    /// The reply target was found in the conversation's index
    #[serde(skip)]
    pub reply_found: bool,
}

impl OutputRow {
    /// Returns `true` if the message referenced a reply target.
    pub fn has_reply(&self) -> bool {
        !self.reply_to_id.is_empty()
    }

    /// Returns `true` if the reply target was found in the conversation.
    pub fn reply_resolved(&self) -> bool {
        self.has_reply() && self.reply_found
    }
}

/// Column order of tabular output.
pub const ROW_COLUMNS: [&str; 10] = [
    "chat",
    "id",
    "date",
    "from",
    "from_id",
    "text",
    "reply_to_id",
    "reply_from",
    "reply_date",
    "reply_text",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let with_id = ConversationSummary {
            id: Some(1863959277),
            name: "42 ИП Куратор".into(),
        };
        assert_eq!(with_id.to_string(), "42 ИП Куратор [id=1863959277]");

        let without_id = ConversationSummary {
            id: None,
            name: "(untitled)".into(),
        };
        assert_eq!(without_id.to_string(), "(untitled) [id=None]");
    }

    #[test]
    fn test_reply_flags() {
        let plain = OutputRow::default();
        assert!(!plain.has_reply());
        assert!(!plain.reply_resolved());

        let unresolved = OutputRow {
            reply_to_id: "5".into(),
            ..OutputRow::default()
        };
        assert!(unresolved.has_reply());
        assert!(!unresolved.reply_resolved());

        let resolved = OutputRow {
            reply_to_id: "5".into(),
            reply_from: "Bob".into(),
            reply_date: "2024-01-01T00:00:00".into(),
            reply_text: "original".into(),
            reply_found: true,
            ..OutputRow::default()
        };
        assert!(resolved.reply_resolved());

        // A found target with no sender, date or text is still resolved
        let bare = OutputRow {
            reply_to_id: "5".into(),
            reply_found: true,
            ..OutputRow::default()
        };
        assert!(bare.reply_resolved());
    }
}
