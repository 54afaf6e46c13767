//! Per-conversation message decoding and the id index used for replies.

use std::collections::HashMap;

use tracing::debug;

use crate::core::discovery::messages_array_start;
use crate::parsing::decoder::decode_messages;
use crate::parsing::telegram::ExportMessage;

/// Decodes every message object in a conversation's `messages` array.
///
/// Returns an empty list when the container has no message collection.
/// Everything after the marker is scanned, so a truncated array still yields
/// the messages before the cut.
pub fn container_messages(container: &str) -> Vec<ExportMessage> {
    match messages_array_start(container) {
        Some(start) => decode_messages(&container[start..]),
        None => Vec::new(),
    }
}

/// Lookup from message id to message, scoped to one conversation.
///
/// Only `type == "message"` records with an integer id are indexed. If an id
/// occurs twice, the later record wins.
#[derive(Debug, Clone, Default)]
pub struct MessageIndex<'m> {
    by_id: HashMap<i64, &'m ExportMessage>,
}

impl<'m> MessageIndex<'m> {
    /// Builds the index over already decoded messages.
    pub fn build(messages: &'m [ExportMessage]) -> Self {
        let by_id: HashMap<i64, &'m ExportMessage> = messages
            .iter()
            .filter(|msg| msg.is_message())
            .filter_map(|msg| msg.numeric_id().map(|id| (id, msg)))
            .collect();

        debug!(messages = messages.len(), indexed = by_id.len(), "built message index");
        Self { by_id }
    }

    /// Looks up a message by id.
    pub fn get(&self, id: i64) -> Option<&'m ExportMessage> {
        self.by_id.get(&id).copied()
    }

    /// Number of indexed messages.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
