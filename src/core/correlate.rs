//! Turning one conversation's messages into output rows.

use serde_json::Value;

use crate::core::filter::FilterConfig;
use crate::core::index::MessageIndex;
use crate::core::models::OutputRow;
use crate::parsing::telegram::ExportMessage;

/// Builds one [`OutputRow`] per message that passes `filter` and has text.
///
/// Messages are visited in scan order, including ones without a usable id;
/// the index is only consulted to resolve reply targets.
pub fn correlate(
    chat: &str,
    messages: &[ExportMessage],
    index: &MessageIndex<'_>,
    filter: &FilterConfig,
) -> Vec<OutputRow> {
    messages
        .iter()
        .filter(|msg| msg.is_message())
        .filter(|msg| filter.matches_author(msg) && filter.matches_date(msg))
        .filter_map(|msg| build_row(chat, msg, index))
        .collect()
}

fn build_row(chat: &str, msg: &ExportMessage, index: &MessageIndex<'_>) -> Option<OutputRow> {
    let text = msg.flat_text().trim().to_string();
    if text.is_empty() {
        return None;
    }

    let mut row = OutputRow {
        chat: chat.to_string(),
        id: raw_text(msg.id.as_ref()),
        date: msg.date_text(),
        from: msg.sender(),
        from_id: msg.author_id(),
        text,
        reply_to_id: raw_text(msg.reply_to_message_id.as_ref()),
        ..OutputRow::default()
    };

    if let Some(target) = msg.reply_target().and_then(|id| index.get(id)) {
        row.reply_from = target.sender();
        row.reply_date = target.date_text();
        row.reply_text = target.flat_text().trim().to_string();
        row.reply_found = true;
    }

    Some(row)
}

/// Renders an id field the way it appears in the export.
fn raw_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
