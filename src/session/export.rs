// Session export: plain-text blocks, CSV, and the periodic auto-save.
//
// Text blocks look like:
//
//   Original: <text>
//   Masked: <text>
//   Language: <code>
//   Sentiment: <label>
//
// with a blank line after each record. The live history view omits the
// Sentiment line.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::models::CommentRecord;

/// Default auto-save destination, relative to the working directory.
pub const DEFAULT_AUTOSAVE_PATH: &str = "auto_saved_history.txt";
/// Default auto-save interval in seconds.
pub const DEFAULT_AUTOSAVE_SECS: u64 = 60;

/// CSV header row.
pub const CSV_HEADER: [&str; 4] = ["Original Comment", "Masked Comment", "Language", "Sentiment"];

fn render(records: &[CommentRecord], with_sentiment: bool) -> String {
    let mut out = String::new();
    for record in records {
        // Writing to a String cannot fail
        let _ = writeln!(out, "Original: {}", record.original);
        let _ = writeln!(out, "Masked: {}", record.masked);
        let _ = writeln!(out, "Language: {}", record.language);
        if with_sentiment {
            let _ = writeln!(out, "Sentiment: {}", record.sentiment);
        }
        out.push('\n');
    }
    out
}

/// History view: Original/Masked/Language blocks.
pub fn render_history(records: &[CommentRecord]) -> String {
    render(records, false)
}

/// Saved-file format: history blocks plus the Sentiment line.
pub fn render_blocks(records: &[CommentRecord]) -> String {
    render(records, true)
}

/// Write the session as text blocks to `path`, replacing any existing file.
pub fn write_text(records: &[CommentRecord], path: &Path) -> Result<()> {
    std::fs::write(path, render_blocks(records))
        .with_context(|| format!("Failed to write history to {}", path.display()))?;
    debug!(records = records.len(), path = %path.display(), "Wrote text history");
    Ok(())
}

/// Write the session as CSV to `path`, replacing any existing file.
pub fn write_csv(records: &[CommentRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.original.as_str(),
            record.masked.as_str(),
            record.language.as_str(),
            record.sentiment.as_str(),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush CSV file {}", path.display()))?;
    debug!(records = records.len(), path = %path.display(), "Wrote CSV history");
    Ok(())
}

/// Overwrite `path` with the current session if there is anything to save.
///
/// Returns whether a file was written.
pub fn autosave(records: &[CommentRecord], path: &Path) -> Result<bool> {
    if records.is_empty() {
        return Ok(false);
    }
    write_text(records, path)?;
    Ok(true)
}
