//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::OutputRow;
use crate::error::{Result, SiftError};

/// Writes rows to CSV.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `chat`, `id`, `date`, `from`, `from_id`, `text`, `reply_to_id`,
///   `reply_from`, `reply_date`, `reply_text`
/// - Encoding: UTF-8
///
/// The header is written even when `rows` is empty.
pub fn write_csv<'r>(rows: impl IntoIterator<Item = &'r OutputRow>, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(rows, file)
}

/// Renders rows as a CSV string.
pub fn to_csv<'r>(rows: impl IntoIterator<Item = &'r OutputRow>) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| SiftError::utf8("CSV output", e))
}

fn write_rows<'r, W: Write>(rows: impl IntoIterator<Item = &'r OutputRow>, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(crate::core::models::ROW_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}
