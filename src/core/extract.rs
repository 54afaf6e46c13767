//! End-to-end extraction over an export's text.
//!
//! [`extract_single`] and [`extract_all`] tie the pipeline together:
//! discovery, selection, message indexing and row correlation. Both return the
//! full list of discovered conversations so callers can print it.
//!
//! Callers that must show the discovered list even when selection fails run
//! [`discover_conversations`] themselves and pass the result to
//! [`extract_single_from`] or [`extract_all_from`].
//!
//! # Example
//!
//! ```rust
//! use tgsift::config::ExtractConfig;
//! use tgsift::core::extract::extract_all;
//! use tgsift::core::filter::FilterConfig;
//!
//! let text = r#"{"chats":{"list":[
//!   {"name":"Alice","id":1,"messages":[
//!     {"id":1,"type":"message","from":"Me","from_id":"user7","text":"hi"}]},
//!   {"name":"Bob","id":2,"messages":[
//!     {"id":1,"type":"message","from":"Bob","from_id":"user2","text":"yo"}]}
//! ]}}"#;
//!
//! let result = extract_all(text, &FilterConfig::by_user_id(7), &ExtractConfig::default());
//! assert_eq!(result.conversations.len(), 2);
//! assert_eq!(result.total_rows(), 1);
//! assert_eq!(result.matched().count(), 1);
//! ```

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::config::ExtractConfig;
use crate::core::correlate::correlate;
use crate::core::discovery::{Conversation, Discovery, discover_conversations};
use crate::core::filter::FilterConfig;
use crate::core::index::{MessageIndex, container_messages};
use crate::core::models::{ConversationSummary, OutputRow};
use crate::core::selector::{ConversationQuery, select_conversation};
use crate::error::Result;

/// Result of [`extract_single`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleExtraction {
    /// Every discovered conversation, in document order
    pub conversations: Vec<ConversationSummary>,
    /// Display name of the selected conversation
    pub chat_name: String,
    /// Matching rows in scan order
    pub rows: Vec<OutputRow>,
}

/// Rows produced for one conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRows {
    /// Which conversation
    pub summary: ConversationSummary,
    /// Matching rows in scan order
    pub rows: Vec<OutputRow>,
}

impl ConversationRows {
    /// Number of rows.
    pub fn count(&self) -> usize {
        self.rows.len()
    }
}

/// Result of [`extract_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiExtraction {
    /// Every discovered conversation, in document order
    pub conversations: Vec<ConversationSummary>,
    /// One entry per discovered conversation, in the same order
    pub results: Vec<ConversationRows>,
}

impl MultiExtraction {
    /// Total rows across all conversations.
    pub fn total_rows(&self) -> usize {
        self.results.iter().map(ConversationRows::count).sum()
    }

    /// Conversations that produced at least one row, in document order.
    pub fn matched(&self) -> impl Iterator<Item = &ConversationRows> {
        self.results.iter().filter(|r| !r.rows.is_empty())
    }

    /// Rows grouped by chat name, names sorted, rows in scan order.
    ///
    /// Two conversations sharing a display name end up in one group.
    pub fn rows_by_chat(&self) -> BTreeMap<&str, Vec<&OutputRow>> {
        let mut grouped: BTreeMap<&str, Vec<&OutputRow>> = BTreeMap::new();
        for result in self.matched() {
            grouped
                .entry(result.summary.name.as_str())
                .or_default()
                .extend(result.rows.iter());
        }
        grouped
    }
}

/// Extracts matching rows from one selected conversation.
///
/// # Errors
///
/// Returns [`SiftError::ConversationNotFound`](crate::SiftError::ConversationNotFound)
/// if `query` names a conversation that was not discovered, or
/// [`SiftError::NoConversations`](crate::SiftError::NoConversations) if
/// nothing was discovered at all.
pub fn extract_single(
    text: &str,
    query: &ConversationQuery,
    filter: &FilterConfig,
    config: &ExtractConfig,
) -> Result<SingleExtraction> {
    extract_single_from(&discover_conversations(text, config), query, filter, config)
}

/// Same as [`extract_single`] over an already discovered export.
///
/// # Errors
///
/// As for [`extract_single`].
pub fn extract_single_from(
    discovery: &Discovery<'_>,
    query: &ConversationQuery,
    filter: &FilterConfig,
    config: &ExtractConfig,
) -> Result<SingleExtraction> {
    let selected = select_conversation(&discovery.conversations, query, config)?;
    info!(chat = %selected.name, id = ?selected.id, "selected conversation");

    let rows = conversation_rows(selected, filter);
    Ok(SingleExtraction {
        conversations: discovery.summaries(),
        chat_name: selected.name.clone(),
        rows,
    })
}

/// Extracts matching rows from every discovered conversation.
///
/// Each conversation is decoded, indexed and correlated before the next one
/// is touched; reply lookups never cross conversations.
pub fn extract_all(text: &str, filter: &FilterConfig, config: &ExtractConfig) -> MultiExtraction {
    extract_all_from(&discover_conversations(text, config), filter)
}

/// Same as [`extract_all`] over an already discovered export.
pub fn extract_all_from(discovery: &Discovery<'_>, filter: &FilterConfig) -> MultiExtraction {
    let results: Vec<ConversationRows> = discovery
        .conversations
        .iter()
        .map(|conversation| ConversationRows {
            summary: conversation.summary(),
            rows: conversation_rows(conversation, filter),
        })
        .collect();

    MultiExtraction {
        conversations: discovery.summaries(),
        results,
    }
}

/// Removes leading byte-order marks.
pub fn strip_bom(text: &str) -> &str {
    text.trim_start_matches('\u{FEFF}')
}

fn conversation_rows(conversation: &Conversation<'_>, filter: &FilterConfig) -> Vec<OutputRow> {
    let messages = container_messages(conversation.container);
    let index = MessageIndex::build(&messages);
    let rows = correlate(&conversation.name, &messages, &index, filter);
    debug!(
        chat = %conversation.name,
        messages = messages.len(),
        rows = rows.len(),
        "correlated conversation"
    );
    rows
}
