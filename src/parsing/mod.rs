//! Low-level parsing of export text.
//!
//! - [`scanner`] - finds balanced `{ ... }` fragments in arbitrary text
//! - [`decoder`] - decodes fragments into [`ExportMessage`] records
//! - [`telegram`] - the message record and its field helpers

pub mod decoder;
pub mod scanner;
pub mod telegram;

// Re-export commonly used items
pub use decoder::{decode_message, decode_messages};
pub use scanner::{Fragments, RawFragment, Scan, next_fragment};
pub use telegram::{ExportMessage, author_id_for, flatten_text};
