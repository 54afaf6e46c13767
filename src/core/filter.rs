//! Author and date filters.
//!
//! This module provides [`FilterConfig`], the caller's description of *whose*
//! messages to keep and, optionally, in which date window.
//!
//! # Author Matching
//!
//! | Filter | Compares | Rule |
//! |--------|----------|------|
//! | [`AuthorFilter::ById`] | `from_id` | equals `user<id>`; names are never consulted |
//! | [`AuthorFilter::ByName`] (default) | normalized sender | lowercase sender contains lowercase fragment |
//! | [`AuthorFilter::ByName`] (exact) | normalized sender | equals the fragment verbatim |
//!
//! # Examples
//!
//! ```
//! use tgsift::core::filter::FilterConfig;
//!
//! # fn main() -> tgsift::Result<()> {
//! // Author id wins when both are supplied
//! let config = FilterConfig::from_parts(Some(305696040), Some("Kirill"), false)?;
//! assert_eq!(config.describe(), "user-id=305696040");
//!
//! // Name fragment plus a date window
//! let config = FilterConfig::by_name("tan")
//!     .with_date_from("2024-01-01")?
//!     .with_date_to("2024-12-31")?;
//! assert!(config.has_date_filter());
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Messages whose `date` cannot be parsed are excluded when a date bound is set
//! - Date bounds are inclusive whole days
//! - Author and date filters are combined with AND logic

use chrono::NaiveDate;
use tracing::warn;

use crate::core::normalize::normalize_name;
use crate::error::{Result, SiftError};
use crate::parsing::telegram::{ExportMessage, author_id_for};

/// Whose messages to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorFilter {
    /// Match `from_id == "user<id>"`.
    ById(u64),
    /// Match the normalized sender name.
    ByName {
        /// Normalized name or name fragment
        fragment: String,
        /// Require full, case-sensitive equality
        exact: bool,
    },
}

/// Filter criteria applied to every message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Author criterion
    pub author: AuthorFilter,

    /// Keep only messages on or after this day.
    pub after: Option<NaiveDate>,

    /// Keep only messages on or before this day.
    pub before: Option<NaiveDate>,
}

impl FilterConfig {
    /// Filters by numeric user id.
    pub fn by_user_id(user_id: u64) -> Self {
        Self::with_author(AuthorFilter::ById(user_id))
    }

    /// Filters by sender name fragment (case-insensitive containment).
    pub fn by_name(fragment: impl AsRef<str>) -> Self {
        Self::with_author(AuthorFilter::ByName {
            fragment: normalize_name(fragment.as_ref()),
            exact: false,
        })
    }

    /// Filters by full sender name (case-sensitive equality).
    pub fn by_exact_name(name: impl AsRef<str>) -> Self {
        Self::with_author(AuthorFilter::ByName {
            fragment: normalize_name(name.as_ref()),
            exact: true,
        })
    }

    /// Builds the author filter from loose caller input.
    ///
    /// The user id takes precedence: when both are given, the name is ignored.
    /// `exact` only applies to the name.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::MissingAuthorFilter`] if neither is given (a
    /// blank name counts as absent).
    pub fn from_parts(user_id: Option<u64>, user_name: Option<&str>, exact: bool) -> Result<Self> {
        let name = user_name.filter(|n| !n.trim().is_empty());
        match (user_id, name) {
            (Some(id), Some(name)) => {
                warn!(user_id = id, user_name = name, "both author id and name given; matching by id only");
                Ok(Self::by_user_id(id))
            }
            (Some(id), None) => Ok(Self::by_user_id(id)),
            (None, Some(name)) if exact => Ok(Self::by_exact_name(name)),
            (None, Some(name)) => Ok(Self::by_name(name)),
            (None, None) => Err(SiftError::MissingAuthorFilter),
        }
    }

    fn with_author(author: AuthorFilter) -> Self {
        Self {
            author,
            after: None,
            before: None,
        }
    }

    /// Sets the start date filter (inclusive).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_day(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_day(date_str)?);
        Ok(self)
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Checks the author criterion.
    pub fn matches_author(&self, msg: &ExportMessage) -> bool {
        match &self.author {
            AuthorFilter::ById(id) => msg.author_id() == author_id_for(*id),
            AuthorFilter::ByName { fragment, exact: true } => msg.sender() == *fragment,
            AuthorFilter::ByName { fragment, exact: false } => msg
                .sender()
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
        }
    }

    /// Checks the date window; always passes when no bound is set.
    pub fn matches_date(&self, msg: &ExportMessage) -> bool {
        if !self.has_date_filter() {
            return true;
        }
        let Some(day) = msg.parsed_date().map(|dt| dt.date()) else {
            return false;
        };
        !self.after.is_some_and(|after| day < after) && !self.before.is_some_and(|before| day > before)
    }

    /// Human-readable description for report headers.
    pub fn describe(&self) -> String {
        match &self.author {
            AuthorFilter::ById(id) => format!("user-id={id}"),
            AuthorFilter::ByName { fragment, .. } => format!("user~'{fragment}'"),
        }
    }

    /// Short label for default output file names.
    pub fn label(&self) -> String {
        match &self.author {
            AuthorFilter::ById(id) => id.to_string(),
            AuthorFilter::ByName { fragment, .. } if fragment.is_empty() => "user".to_string(),
            AuthorFilter::ByName { fragment, .. } => fragment.clone(),
        }
    }
}

fn parse_day(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| SiftError::invalid_date(date_str))
}
