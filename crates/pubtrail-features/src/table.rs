//! Separator-delimited feature tables

use crate::calculator::FeatureRow;
use crate::config::FeatureConfig;
use crate::error::FeatureError;
use std::io::Write;

/// Column headings, in the order [`FeatureRow::columns`] emits values
pub const TABLE_HEADER: [&str; 13] = [
    "title",
    "doi",
    "received month",
    "received year",
    "accepted month",
    "accepted year",
    "published month",
    "published year",
    "issued month",
    "issued year",
    "received - accepted",
    "accepted - published",
    "published - issued",
];

/// Write a header line followed by one line per row
///
/// Values are joined with `config.separator` as-is. Embedded separators are
/// not escaped; callers that need that must clean titles beforehand.
pub fn write_table<W: Write>(
    writer: &mut W,
    rows: &[FeatureRow],
    config: &FeatureConfig,
) -> Result<(), FeatureError> {
    config.validate().map_err(FeatureError::Config)?;

    writeln!(writer, "{}", TABLE_HEADER.join(config.separator.as_str()))?;
    for row in rows {
        writeln!(writer, "{}", row.columns(config).join(config.separator.as_str()))?;
    }
    writer.flush()?;
    Ok(())
}
