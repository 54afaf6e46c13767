//! Picking one conversation out of the discovered list.
//!
//! Precedence:
//!
//! 1. an explicit numeric id (exact match, first hit);
//! 2. a name query, tried as exact, then substring, then prefix match,
//!    case-insensitive on NFKC- and whitespace-normalized names;
//! 3. otherwise the first conversation that is not the self-notes chat, or
//!    the very first one if every conversation looks like self-notes.

use crate::config::ExtractConfig;
use crate::core::discovery::Conversation;
use crate::core::models::ConversationSummary;
use crate::core::normalize::fold;
use crate::error::{Result, SiftError};

/// Which conversation the caller wants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationQuery {
    /// Numeric chat id
    pub id: Option<u64>,
    /// Name, or part of it
    pub name: Option<String>,
}

impl ConversationQuery {
    /// An empty query: pick the default conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select by numeric id.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Select by name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns `true` if an id or a non-blank name was given.
    pub fn is_specified(&self) -> bool {
        self.id.is_some() || self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// Selects one conversation according to `query`.
pub fn select_conversation<'c, 'a>(
    conversations: &'c [Conversation<'a>],
    query: &ConversationQuery,
    config: &ExtractConfig,
) -> Result<&'c Conversation<'a>> {
    if let Some(id) = query.id {
        return conversations
            .iter()
            .find(|c| c.id == Some(id))
            .ok_or_else(|| SiftError::conversation_id_not_found(id, samples(conversations, config)));
    }

    if let Some(name) = query.name.as_deref().filter(|n| !n.trim().is_empty()) {
        return find_by_name(conversations, name).ok_or_else(|| {
            SiftError::conversation_name_not_found(name, samples(conversations, config))
        });
    }

    conversations
        .iter()
        .find(|c| !is_self_notes(&c.name, config))
        .or_else(|| conversations.first())
        .ok_or(SiftError::NoConversations)
}

/// Returns `true` if `name` looks like the personal notes chat.
pub fn is_self_notes(name: &str, config: &ExtractConfig) -> bool {
    let folded = fold(name);
    config
        .self_notes_phrases
        .iter()
        .any(|phrase| folded.contains(phrase.as_str()))
        || config.self_notes_names.iter().any(|n| *n == folded)
}

fn find_by_name<'c, 'a>(
    conversations: &'c [Conversation<'a>],
    query: &str,
) -> Option<&'c Conversation<'a>> {
    let query = fold(query);
    let folded: Vec<String> = conversations.iter().map(|c| fold(&c.name)).collect();

    let tiers: [fn(&str, &str) -> bool; 3] = [
        |name, q| name == q,
        |name, q| name.contains(q),
        |name, q| name.starts_with(q),
    ];

    tiers.iter().find_map(|matches| {
        folded
            .iter()
            .position(|name| matches(name, &query))
            .map(|i| &conversations[i])
    })
}

fn samples(conversations: &[Conversation<'_>], config: &ExtractConfig) -> Vec<ConversationSummary> {
    conversations
        .iter()
        .take(config.sample_limit)
        .map(Conversation::summary)
        .collect()
}
