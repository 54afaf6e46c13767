//! Output format writers.
//!
//! This module provides writers for the two output formats:
//! - [`write_report`] / [`to_report`] - human-readable text report, with
//!   [`write_grouped_report`] / [`to_grouped_report`] for multi-chat runs
//! - [`write_csv`] / [`to_csv`] - one line per row - requires `csv-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case |
//! |--------|----------|
//! | Report | reading, pasting into an LLM context |
//! | CSV | spreadsheets, further processing |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> tgsift::Result<()> {
//! use tgsift::core::filter::FilterConfig;
//! use tgsift::core::output::{ReportHeader, to_csv, write_csv, write_report};
//! use tgsift::OutputRow;
//!
//! let filter = FilterConfig::by_user_id(305696040);
//! let rows = vec![OutputRow {
//!     chat: "Team".into(),
//!     text: "Hello!".into(),
//!     ..OutputRow::default()
//! }];
//!
//! write_report("messages.txt", &ReportHeader::for_chat("Team", &filter), &rows)?;
//! write_csv(&rows, "messages.csv")?;
//!
//! // Or get a string
//! let csv_string = to_csv(&rows)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod report;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use report::{ReportHeader, to_grouped_report, to_report, write_grouped_report, write_report};
