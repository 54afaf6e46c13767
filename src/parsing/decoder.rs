//! Fragment decoder.
//!
//! Turns scanned fragments into [`ExportMessage`] records. A fragment that
//! `serde_json` rejects is dropped and scanning continues right after it;
//! damaged tails are expected, so nothing here is ever an error for the caller.

use tracing::{debug, trace};

use super::scanner::{Fragments, RawFragment};
use super::telegram::ExportMessage;

/// Decodes a single fragment.
pub fn decode_message(fragment: &str) -> Result<ExportMessage, serde_json::Error> {
    serde_json::from_str(fragment)
}

/// Scans `text` and decodes every fragment, dropping the ones that fail.
///
/// Records come back in document order.
///
/// ```rust
/// use tgsift::parsing::decoder::decode_messages;
///
/// let text = r#"{"id":1,"type":"message"} {"id": oops} {"id":2,"type":"message"}"#;
/// let ids: Vec<_> = decode_messages(text).iter().map(|m| m.numeric_id()).collect();
/// assert_eq!(ids, vec![Some(1), Some(2)]);
/// ```
pub fn decode_messages(text: &str) -> Vec<ExportMessage> {
    let mut messages = Vec::new();
    let mut dropped = 0usize;

    for fragment in Fragments::new(text) {
        match decode_fragment(&fragment) {
            Some(msg) => messages.push(msg),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(decoded = messages.len(), dropped, "skipped undecodable fragments");
    }
    messages
}

fn decode_fragment(fragment: &RawFragment<'_>) -> Option<ExportMessage> {
    match decode_message(fragment.text) {
        Ok(msg) => Some(msg),
        Err(err) => {
            trace!(start = fragment.start, end = fragment.end, %err, "dropping fragment");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_message_ok() {
        let msg = decode_message(r#"{"id": 5, "type": "message", "text": "hi"}"#).unwrap();
        assert_eq!(msg.numeric_id(), Some(5));
        assert_eq!(msg.flat_text(), "hi");
    }

    #[test]
    fn test_decode_message_rejects_broken_object() {
        assert!(decode_message(r#"{"id": 5, "text": }"#).is_err());
    }

    #[test]
    fn test_decode_messages_recovers_around_garbage() {
        let text = r#"{"id":1,"type":"message","text":"hi"}GARBAGE{"id":2,"type":"message","text":"bye"}"#;
        let messages = decode_messages(text);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].flat_text(), "hi");
        assert_eq!(messages[1].flat_text(), "bye");
    }

    #[test]
    fn test_decode_messages_drops_invalid_and_continues() {
        let text = r#"{"id":1} {"id":} {"id":3} {"id":4"#;
        let ids: Vec<_> = decode_messages(text)
            .iter()
            .map(ExportMessage::numeric_id)
            .collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn test_decode_messages_empty() {
        assert!(decode_messages("").is_empty());
        assert!(decode_messages("]}").is_empty());
    }
}
