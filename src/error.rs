//! Unified error types for tgsift.
//!
//! This module provides a single [`SiftError`] enum covering every failure the
//! library can surface. Most damage in an export is *not* an error: broken
//! fragments are dropped and unresolved replies become empty fields. What is
//! left are I/O problems, a conversation selector that matches nothing, and
//! bad filter input.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::core::models::ConversationSummary;

/// A specialized [`Result`] type for tgsift operations.
///
/// # Example
///
/// ```rust
/// use tgsift::error::Result;
/// use tgsift::OutputRow;
///
/// fn my_function() -> Result<Vec<OutputRow>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SiftError>;

/// The error type for all tgsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SiftError {
    /// An I/O error occurred while reading the export or writing a report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The requested conversation was not among the discovered ones.
    ///
    /// Carries a sample of what *was* discovered so the operator can pick
    /// a better selector.
    #[error("Conversation {criterion} not found{}", format_samples(samples))]
    ConversationNotFound {
        /// What the caller asked for
        criterion: SelectionCriterion,
        /// A bounded sample of discovered conversations
        samples: Vec<ConversationSummary>,
    },

    /// Discovery found no conversation at all and nothing was asked for.
    #[error("No conversations found in the export")]
    NoConversations,

    /// Neither an author id nor an author name was supplied.
    #[error(
        "No author filter given. Pass a user id (e.g. --user-id 305696040) or a name fragment (e.g. --user \"Kirill\")"
    )]
    MissingAuthorFilter,

    /// Invalid date format in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// The selector that failed to match a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionCriterion {
    /// Numeric conversation id
    Id(u64),
    /// Name query, as the caller supplied it
    Name(String),
}

impl fmt::Display for SelectionCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionCriterion::Id(id) => write!(f, "with id={id}"),
            SelectionCriterion::Name(name) => write!(f, "matching '{name}'"),
        }
    }
}

fn format_samples(samples: &[ConversationSummary]) -> String {
    if samples.is_empty() {
        return String::new();
    }
    let lines: Vec<String> = samples.iter().map(|s| format!("- {s}")).collect();
    format!(". Examples:\n{}", lines.join("\n"))
}

impl From<std::string::FromUtf8Error> for SiftError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SiftError::Utf8 {
            context: "export file".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SiftError {
    /// Creates a "conversation not found by id" error.
    pub fn conversation_id_not_found(id: u64, samples: Vec<ConversationSummary>) -> Self {
        SiftError::ConversationNotFound {
            criterion: SelectionCriterion::Id(id),
            samples,
        }
    }

    /// Creates a "conversation not found by name" error.
    pub fn conversation_name_not_found(
        query: impl Into<String>,
        samples: Vec<ConversationSummary>,
    ) -> Self {
        SiftError::ConversationNotFound {
            criterion: SelectionCriterion::Name(query.into()),
            samples,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        SiftError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        SiftError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, SiftError::Io(_))
    }

    /// Returns `true` if no conversation could be selected.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SiftError::ConversationNotFound { .. } | SiftError::NoConversations
        )
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, SiftError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
