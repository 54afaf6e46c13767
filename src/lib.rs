//! # tgsift
//!
//! A Rust library for pulling one participant's messages, with the messages
//! they replied to, out of Telegram Desktop JSON exports.
//!
//! ## Overview
//!
//! Real-world exports are often not valid JSON documents: they get truncated
//! by interrupted downloads, several single-chat exports get pasted into one
//! file, or the outer wrapper goes missing. tgsift never parses the file as a
//! whole. Instead it:
//!
//! 1. scans the text for balanced `{ ... }` fragments ([`parsing::scanner`]);
//! 2. decides which fragments are conversations ([`core::discovery`]);
//! 3. decodes each conversation's messages one by one, dropping broken ones
//!    ([`parsing::decoder`]);
//! 4. filters by author and date, resolving replies within the same
//!    conversation ([`core::correlate`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use tgsift::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // The second chat is cut off mid-message; the first still counts.
//!     let text = r#"{"chats": {"list": [
//!         {"name": "Team", "id": 1, "messages": [
//!             {"id": 1, "type": "message", "from": "Bob", "from_id": "user2", "text": "ready?"},
//!             {"id": 2, "type": "message", "from": "Me", "from_id": "user7", "text": "yes", "reply_to_message_id": 1}
//!         ]},
//!         {"name": "Other", "id": 2, "messages": [{"id": 1, "type": "mess"#;
//!
//!     let result = extract_single(
//!         text,
//!         &ConversationQuery::new().with_name("team"),
//!         &FilterConfig::by_user_id(7),
//!         &ExtractConfig::default(),
//!     )?;
//!
//!     assert_eq!(result.rows.len(), 1);
//!     assert_eq!(result.rows[0].reply_text, "ready?");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] — Low-level text handling
//!   - [`parsing::scanner`] — balanced-fragment scanner
//!   - [`parsing::decoder`] — tolerant message decoding
//!   - [`parsing::telegram`] — [`ExportMessage`] and field helpers
//! - [`core`] — The extraction pipeline
//!   - [`core::discovery`], [`core::selector`], [`core::index`]
//!   - [`core::filter`] — [`FilterConfig`]
//!   - [`core::extract`] — [`extract_single`], [`extract_all`]
//!   - [`core::output`] — text report and CSV writers
//! - [`config`] — [`ExtractConfig`]
//! - [`cli`] — CLI arguments (feature `cli`)
//! - [`error`] — Unified error types ([`SiftError`], [`Result`])
//! - [`prelude`] — Convenient re-exports
//!
//! ## Logging
//!
//! The library logs through [`tracing`]: discovery mode and counts at
//! `debug`, dropped fragments at `trace`. Install any subscriber to see them.
//!
//! [`ExportMessage`]: parsing::ExportMessage
//! [`FilterConfig`]: core::FilterConfig
//! [`extract_single`]: core::extract_single
//! [`extract_all`]: core::extract_all

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use config::ExtractConfig;
pub use core::models::{ConversationSummary, OutputRow};
pub use error::{Result, SiftError};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use tgsift::prelude::*;
/// ```
pub mod prelude {
    // Rows and identities
    pub use crate::core::models::{ConversationSummary, OutputRow};

    // Error types
    pub use crate::error::{Result, SiftError};

    // Configuration
    pub use crate::config::ExtractConfig;
    pub use crate::core::filter::{AuthorFilter, FilterConfig};
    pub use crate::core::selector::ConversationQuery;

    // Pipeline
    pub use crate::core::discovery::discover_conversations;
    pub use crate::core::extract::{
        ConversationRows, MultiExtraction, SingleExtraction, extract_all, extract_all_from,
        extract_single, extract_single_from, strip_bom,
    };

    // Output (file writers and string converters)
    pub use crate::core::output::{
        ReportHeader, to_grouped_report, to_report, write_grouped_report, write_report,
    };
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
}
