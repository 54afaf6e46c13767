//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Scope`] - Whether one chat or every chat is searched
//!
//! The conversion helpers on [`Args`] turn raw flags into library types, so
//! `main.rs` only orchestrates.
//!
//! ```rust
//! use clap::Parser;
//! use tgsift::cli::{Args, Scope};
//!
//! let args = Args::parse_from(["tgsift", "--user-id", "305696040", "--chat", "Team"]);
//! assert_eq!(args.scope(), Scope::Single);
//! assert_eq!(args.txt_path().unwrap(), "messages_305696040.txt");
//! ```

use clap::Parser;

use crate::config::ExtractConfig;
use crate::core::filter::FilterConfig;
use crate::core::selector::ConversationQuery;
use crate::error::Result;

/// Pull one participant's messages (with reply context) out of a Telegram
/// export, even a truncated or concatenated one.
#[derive(Parser, Debug, Clone)]
#[command(name = "tgsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tgsift --in result.json --user-id 305696040
    tgsift --user \"Kirill\" --chat \"Project Alpha\"
    tgsift --user-id 305696040 --chat-id 1863959277 --after 2024-01-01
    tgsift --user \"Татьяна\" --exact --txt-out tanya.txt --csv-out tanya.csv")]
pub struct Args {
    /// Path to the export file
    #[arg(long = "in", value_name = "PATH", default_value = "result.json")]
    pub input: String,

    /// Author's numeric Telegram id (matched against from_id = user<ID>)
    #[arg(long, value_name = "ID")]
    pub user_id: Option<u64>,

    /// Author name or part of it (ignored when --user-id is given)
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Require the full, case-sensitive author name
    #[arg(long)]
    pub exact: bool,

    /// Search only the chat whose name matches
    #[arg(long, value_name = "NAME")]
    pub chat: Option<String>,

    /// Search only the chat with this id
    #[arg(long, value_name = "ID")]
    pub chat_id: Option<u64>,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Extra chat name to treat as the self-notes chat (repeatable)
    #[arg(long = "self-notes", value_name = "NAME")]
    pub self_notes: Vec<String>,

    /// Text report path
    #[arg(long, value_name = "PATH")]
    pub txt_out: Option<String>,

    /// CSV path
    #[arg(long, value_name = "PATH")]
    pub csv_out: Option<String>,
}

/// Which conversations a run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// One chat, chosen by `--chat` / `--chat-id`
    Single,
    /// Every discovered chat
    All,
}

impl Args {
    /// Single mode when a chat selector was given, otherwise all chats.
    pub fn scope(&self) -> Scope {
        if self.conversation_query().is_specified() {
            Scope::Single
        } else {
            Scope::All
        }
    }

    /// Author and date filters.
    ///
    /// # Errors
    ///
    /// Fails without an author, or on a malformed date.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::from_parts(self.user_id, self.user.as_deref(), self.exact)?;
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }

    /// Chat selector from `--chat-id` and `--chat`.
    pub fn conversation_query(&self) -> ConversationQuery {
        let mut query = ConversationQuery::new();
        if let Some(id) = self.chat_id {
            query = query.with_id(id);
        }
        if let Some(ref name) = self.chat {
            query = query.with_name(name.clone());
        }
        query
    }

    /// Default settings plus any `--self-notes` names.
    pub fn extract_config(&self) -> ExtractConfig {
        self.self_notes
            .iter()
            .fold(ExtractConfig::default(), |config, name| config.add_self_notes_name(name))
    }

    /// Report path: `--txt-out` or `messages_<who>[_ALL].txt`.
    pub fn txt_path(&self) -> Result<String> {
        match self.txt_out {
            Some(ref path) => Ok(path.clone()),
            None => self.default_path("txt"),
        }
    }

    /// CSV path: `--csv-out` or `messages_<who>[_ALL].csv`.
    pub fn csv_path(&self) -> Result<String> {
        match self.csv_out {
            Some(ref path) => Ok(path.clone()),
            None => self.default_path("csv"),
        }
    }

    fn default_path(&self, extension: &str) -> Result<String> {
        let who = self.filter_config()?.label();
        let suffix = match self.scope() {
            Scope::Single => "",
            Scope::All => "_ALL",
        };
        Ok(format!("messages_{who}{suffix}.{extension}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::AuthorFilter;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tgsift").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["--user-id", "1"]);
        assert_eq!(args.input, "result.json");
        assert_eq!(args.scope(), Scope::All);
        assert!(!args.exact);
        assert!(args.self_notes.is_empty());
    }

    #[test]
    fn test_default_paths() {
        let all = parse(&["--user-id", "305696040"]);
        assert_eq!(all.txt_path().unwrap(), "messages_305696040_ALL.txt");
        assert_eq!(all.csv_path().unwrap(), "messages_305696040_ALL.csv");

        let single = parse(&["--user", " Кирилл ", "--chat-id", "7"]);
        assert_eq!(single.txt_path().unwrap(), "messages_Кирилл.txt");
    }

    #[test]
    fn test_explicit_paths() {
        let args = parse(&["--user-id", "1", "--txt-out", "a.txt", "--csv-out", "b.csv"]);
        assert_eq!(args.txt_path().unwrap(), "a.txt");
        assert_eq!(args.csv_path().unwrap(), "b.csv");
    }

    #[test]
    fn test_filter_config() {
        let args = parse(&["--user", "Ann", "--exact", "--after", "2024-01-01"]);
        let filter = args.filter_config().unwrap();
        assert!(matches!(filter.author, AuthorFilter::ByName { exact: true, .. }));
        assert!(filter.after.is_some());
        assert!(filter.before.is_none());
    }

    #[test]
    fn test_missing_author() {
        let args = parse(&["--chat", "Team"]);
        assert!(args.filter_config().is_err());
        assert!(args.txt_path().is_err());
    }

    #[test]
    fn test_bad_date() {
        let args = parse(&["--user-id", "1", "--before", "yesterday"]);
        assert!(args.filter_config().unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_conversation_query() {
        let args = parse(&["--user-id", "1", "--chat", "Team", "--chat-id", "9"]);
        let query = args.conversation_query();
        assert_eq!(query.id, Some(9));
        assert_eq!(query.name.as_deref(), Some("Team"));
        assert_eq!(args.scope(), Scope::Single);
    }

    #[test]
    fn test_self_notes_extend_config() {
        let args = parse(&["--user-id", "1", "--self-notes", "Me", "--self-notes", "Notes"]);
        let config = args.extract_config();
        assert!(config.self_notes_names.contains(&"me".to_string()));
        assert!(config.self_notes_names.contains(&"notes".to_string()));
        assert!(config.self_notes_names.contains(&"саня".to_string()));
    }

    #[test]
    fn test_non_numeric_user_id_rejected() {
        let result = Args::try_parse_from(["tgsift", "--user-id", "abc"]);
        assert!(result.is_err());
    }
}
