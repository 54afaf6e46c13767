//! Configuration for conversation discovery and selection.
//!
//! This module provides a plain configuration struct for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use tgsift::config::ExtractConfig;
//!
//! let config = ExtractConfig::new()
//!     .with_discovery_cap(500)
//!     .add_self_notes_name("notes to self");
//!
//! assert_eq!(config.discovery_cap, 500);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::normalize::fold;

/// Settings for the extraction pipeline.
///
/// The self-notes lists decide which conversation is skipped when no chat is
/// selected explicitly. They are locale-specific, which is why they live here
/// rather than being hardcoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Maximum number of candidate conversations to collect (default: 10,000)
    pub discovery_cap: usize,

    /// Discovered conversations quoted in a "not found" error (default: 30)
    pub sample_limit: usize,

    /// Discovered conversations the CLI lists before working (default: 200)
    pub listing_limit: usize,

    /// Lowercase phrases that mark a self-notes chat when contained in its name
    pub self_notes_phrases: Vec<String>,

    /// Lowercase names that mark a self-notes chat on exact match
    pub self_notes_names: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            discovery_cap: 10_000,
            sample_limit: 30,
            listing_limit: 200,
            self_notes_phrases: vec!["saved messages".to_string(), "избранное".to_string()],
            self_notes_names: vec!["саня".to_string()],
        }
    }
}

impl ExtractConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the discovery safety cap.
    #[must_use]
    pub fn with_discovery_cap(mut self, cap: usize) -> Self {
        self.discovery_cap = cap;
        self
    }

    /// Sets how many conversations a "not found" error quotes.
    #[must_use]
    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }

    /// Sets how many discovered conversations are listed for the operator.
    #[must_use]
    pub fn with_listing_limit(mut self, limit: usize) -> Self {
        self.listing_limit = limit;
        self
    }

    /// Replaces the self-notes phrase list.
    #[must_use]
    pub fn with_self_notes_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.self_notes_phrases = phrases.into_iter().map(|p| fold(&p.into())).collect();
        self
    }

    /// Replaces the self-notes exact-name list.
    #[must_use]
    pub fn with_self_notes_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.self_notes_names = names.into_iter().map(|n| fold(&n.into())).collect();
        self
    }

    /// Adds one exact self-notes name to the existing list.
    #[must_use]
    pub fn add_self_notes_name(mut self, name: impl Into<String>) -> Self {
        self.self_notes_names.push(fold(&name.into()));
        self
    }
}
