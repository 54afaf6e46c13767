//! Plain-text report writer.
//!
//! Each row is rendered as:
//!
//! ```text
//! [2024-01-15T10:01:00] Alice (user1) id=6:
//! the message text
//!
//!   ↳ In reply to (id=5) [2024-01-15T10:00:00] Bob:
//!     > the replied-to text
//!
//! --------------------------------------------------------------------------------
//!
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::filter::FilterConfig;
use crate::core::models::OutputRow;
use crate::error::Result;

const SEPARATOR_WIDTH: usize = 80;
const QUOTE_PREFIX: &str = "    > ";
const EMPTY_REPLY: &str = "[no text or media]";

/// First lines of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    /// Selected chat, or `None` for a report over all chats
    pub chat: Option<String>,
    /// Filter description, see [`FilterConfig::describe`]
    pub filter: String,
}

impl ReportHeader {
    /// Header for a single-chat report.
    pub fn for_chat(chat: impl Into<String>, filter: &FilterConfig) -> Self {
        Self {
            chat: Some(chat.into()),
            filter: filter.describe(),
        }
    }

    /// Header for a report covering every chat.
    pub fn all_chats(filter: &FilterConfig) -> Self {
        Self {
            chat: None,
            filter: filter.describe(),
        }
    }

    fn render(&self, out: &mut String) {
        match &self.chat {
            Some(chat) => {
                let _ = writeln!(out, "# Chat: {chat}");
            }
            None => out.push_str("# All chats\n"),
        }
        let _ = writeln!(out, "# Filter: {}\n", self.filter);
    }
}

/// Renders a single-chat report.
pub fn to_report(header: &ReportHeader, rows: &[OutputRow]) -> String {
    let mut out = String::new();
    header.render(&mut out);
    for row in rows {
        render_row(&mut out, row);
    }
    out
}

/// Renders a report with one `## Chat:` section per group, in key order.
pub fn to_grouped_report(header: &ReportHeader, groups: &BTreeMap<&str, Vec<&OutputRow>>) -> String {
    let mut out = String::new();
    header.render(&mut out);
    for (chat, rows) in groups {
        let _ = writeln!(out, "## Chat: {chat}\n");
        for row in rows {
            render_row(&mut out, row);
        }
    }
    out
}

/// Writes a single-chat report to `output_path`.
///
/// # Errors
///
/// Returns [`SiftError::Io`](crate::SiftError::Io) if the file cannot be written.
pub fn write_report(output_path: &str, header: &ReportHeader, rows: &[OutputRow]) -> Result<()> {
    write_text(output_path, &to_report(header, rows))
}

/// Writes a grouped report to `output_path`.
///
/// # Errors
///
/// Returns [`SiftError::Io`](crate::SiftError::Io) if the file cannot be written.
pub fn write_grouped_report(
    output_path: &str,
    header: &ReportHeader,
    groups: &BTreeMap<&str, Vec<&OutputRow>>,
) -> Result<()> {
    write_text(output_path, &to_grouped_report(header, groups))
}

fn write_text(output_path: &str, text: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn render_row(out: &mut String, row: &OutputRow) {
    let _ = writeln!(
        out,
        "[{}] {} ({}) id={}:\n{}",
        row.date, row.from, row.from_id, row.id, row.text
    );

    if row.has_reply() {
        let _ = writeln!(
            out,
            "\n  ↳ In reply to (id={}) [{}] {}:",
            row.reply_to_id, row.reply_date, row.reply_from
        );
        if row.reply_text.is_empty() {
            let _ = writeln!(out, "{QUOTE_PREFIX}{EMPTY_REPLY}");
        } else {
            for line in row.reply_text.split('\n') {
                let _ = writeln!(out, "{QUOTE_PREFIX}{line}");
            }
        }
    }

    let _ = writeln!(out, "\n{}\n", "-".repeat(SEPARATOR_WIDTH));
}
