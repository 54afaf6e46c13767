//! Core extraction logic for tgsift.
//!
//! This module contains:
//! - [`discovery`] - Finding conversations in the export text
//! - [`selector`] - Picking one conversation by id, name or default
//! - [`index`] - Decoding a conversation's messages and indexing them by id
//! - [`filter`] - Author and date filters
//! - [`correlate`] - Building output rows with reply context
//! - [`extract`] - The pipeline end to end
//! - [`models`] - Output rows and conversation summaries
//! - [`normalize`] - Whitespace normalization for names
//! - [`output`] - Report and CSV writers
//!
//! # Quick Start
//!
//! ```rust
//! use tgsift::core::{ConversationQuery, ExtractConfig, FilterConfig, extract_single};
//!
//! let text = r#"{"name":"Team","id":1,"messages":[
//!     {"id":1,"type":"message","from":"Ann","from_id":"user5","text":"hi"}]}"#;
//!
//! let result = extract_single(
//!     text,
//!     &ConversationQuery::new(),
//!     &FilterConfig::by_name("ann"),
//!     &ExtractConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(result.rows[0].text, "hi");
//! ```

pub mod correlate;
pub mod discovery;
pub mod extract;
pub mod filter;
pub mod index;
pub mod models;
pub mod normalize;
pub mod output;
pub mod selector;

// Re-export main types for convenience
pub use crate::config::ExtractConfig;
pub use discovery::{Conversation, Discovery, DiscoveryMode, discover_conversations};
pub use extract::{
    ConversationRows, MultiExtraction, SingleExtraction, extract_all, extract_all_from,
    extract_single, extract_single_from, strip_bom,
};
pub use filter::{AuthorFilter, FilterConfig};
pub use index::MessageIndex;
pub use models::{ConversationSummary, OutputRow};
pub use selector::{ConversationQuery, select_conversation};

pub use output::{ReportHeader, to_grouped_report, to_report, write_grouped_report, write_report};
// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
