//! Conversation discovery.
//!
//! Finds the conversations in an export without parsing it as a whole. Three
//! input shapes are handled, probed once per run:
//!
//! | Mode | Input | Strategy |
//! |------|-------|----------|
//! | [`WrappedList`](DiscoveryMode::WrappedList) | full account export with `"chats": {"list": [` | scan fragments after the marker |
//! | [`FlatScan`](DiscoveryMode::FlatScan) | several single-chat exports glued together | scan the whole text |
//! | [`SingleContainer`](DiscoveryMode::SingleContainer) | anything else | treat the whole text as one chat |
//!
//! A fragment counts as a conversation when it contains a `"messages": [`
//! marker. Identity (`id`, `name`) is pulled out textually; the messages
//! themselves are only decoded later, one conversation at a time.
//!
//! # Example
//!
//! ```rust
//! use tgsift::config::ExtractConfig;
//! use tgsift::core::discovery::{DiscoveryMode, discover_conversations};
//!
//! let text = r#"{"name":"A","id":1,"messages":[]}{"name":"B","id":2,"messages":[]}"#;
//! let discovery = discover_conversations(text, &ExtractConfig::default());
//!
//! assert_eq!(discovery.mode, DiscoveryMode::FlatScan);
//! assert_eq!(discovery.conversations.len(), 2);
//! assert_eq!(discovery.conversations[1].name, "B");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::ExtractConfig;
use crate::core::models::ConversationSummary;
use crate::parsing::scanner::Fragments;

/// Name used for a conversation fragment without a `"name"` field.
pub const UNTITLED_NAME: &str = "(untitled)";

/// Name used when the whole input is treated as one conversation.
pub const SINGLE_EXPORT_NAME: &str = "(single chat export)";

// Desktop exports put an "about" string before "list"; allow it.
static CHATS_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""chats"\s*:\s*\{\s*(?:"about"\s*:\s*"(?:[^"\\]|\\.)*"\s*,\s*)?"list"\s*:\s*\["#)
        .unwrap()
});
static MESSAGES_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""messages"\s*:\s*\["#).unwrap());
static ID_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""id"\s*:\s*([0-9]+)"#).unwrap());
static NAME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""name"\s*:\s*"((?:[^"\\]|\\.)*)""#).unwrap());

/// Which discovery strategy produced the conversation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryMode {
    /// Conversations found inside a `chats.list` wrapper
    WrappedList,
    /// Conversations found by scanning the whole text
    FlatScan,
    /// Nothing qualified; the whole text is one conversation
    SingleContainer,
}

/// A conversation located in the export text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation<'a> {
    /// The conversation's raw text, including its message collection
    pub container: &'a str,
    /// Numeric chat id, if one was found
    pub id: Option<u64>,
    /// Display name (or a placeholder)
    pub name: String,
}

impl<'a> Conversation<'a> {
    /// Reads identity fields from `container`, using `placeholder` as a fallback name.
    pub fn from_container(container: &'a str, placeholder: &str) -> Self {
        Self {
            container,
            id: first_id(container),
            name: first_name(container)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| placeholder.to_string()),
        }
    }

    /// Identity without the text.
    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Result of [`discover_conversations`].
#[derive(Debug, Clone)]
pub struct Discovery<'a> {
    /// Strategy that fired
    pub mode: DiscoveryMode,
    /// Conversations in document order
    pub conversations: Vec<Conversation<'a>>,
}

impl Discovery<'_> {
    /// Identities of all discovered conversations, in order.
    pub fn summaries(&self) -> Vec<ConversationSummary> {
        self.conversations.iter().map(Conversation::summary).collect()
    }
}

/// Finds every conversation in `text`.
pub fn discover_conversations<'a>(text: &'a str, config: &ExtractConfig) -> Discovery<'a> {
    let discovery = if let Some(list_start) = chats_list_start(text) {
        Discovery {
            mode: DiscoveryMode::WrappedList,
            conversations: scan_conversations(text, list_start, config.discovery_cap),
        }
    } else {
        let conversations = scan_conversations(text, 0, config.discovery_cap);
        if conversations.is_empty() {
            Discovery {
                mode: DiscoveryMode::SingleContainer,
                conversations: vec![Conversation::from_container(text, SINGLE_EXPORT_NAME)],
            }
        } else {
            Discovery {
                mode: DiscoveryMode::FlatScan,
                conversations,
            }
        }
    };

    debug!(
        mode = ?discovery.mode,
        conversations = discovery.conversations.len(),
        "discovered conversations"
    );
    discovery
}

/// Byte offset just past the `"chats": {"list": [` marker, if present.
pub fn chats_list_start(text: &str) -> Option<usize> {
    CHATS_LIST.find(text).map(|m| m.end())
}

/// Byte offset just past the `"messages": [` marker, if present.
pub fn messages_array_start(container: &str) -> Option<usize> {
    MESSAGES_ARRAY.find(container).map(|m| m.end())
}

fn scan_conversations(text: &str, from: usize, cap: usize) -> Vec<Conversation<'_>> {
    let conversations: Vec<_> = Fragments::from_offset(text, from)
        .filter(|fragment| MESSAGES_ARRAY.is_match(fragment.text))
        .take(cap)
        .map(|fragment| Conversation::from_container(fragment.text, UNTITLED_NAME))
        .collect();

    if conversations.len() == cap {
        debug!(cap, "discovery cap reached");
    }
    conversations
}

fn first_id(container: &str) -> Option<u64> {
    ID_FIELD
        .captures(container)
        .and_then(|caps| caps[1].parse().ok())
}

fn first_name(container: &str) -> Option<String> {
    let caps = NAME_FIELD.captures(container)?;
    let raw = &caps[1];
    // Unescape through the JSON decoder; keep the raw text if that fails.
    Some(serde_json::from_str(&format!("\"{raw}\"")).unwrap_or_else(|_| raw.to_string()))
}
