//! Result table persistence
//!
//! Appends a run's records to a CSV table on disk. The existing table (if
//! any) is read back as a prefix, then header + prefix + new rows are
//! written to a temp file in the same directory and renamed over the
//! target, so a failed write never clobbers prior runs.

use crate::error::Result;
use crate::orchestrator::LanguageRecord;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

pub const DEFAULT_OUTPUT: &str = "results.csv";

const HEADERS: [&str; 4] = [
    "Language",
    "Translated Question",
    "ChatGPT Response",
    "Translated Back to English",
];

/// Merge `records` into the table at `path`. Returns the total row count
/// now on disk (existing + new).
pub fn persist(records: &[LanguageRecord], path: &Path) -> Result<usize> {
    let existing = read_existing(path);
    debug!(existing_rows = existing.len(), new_rows = records.len(), "writing result table");

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let tmp = match dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new_in(".")?,
    };

    let mut writer = csv::Writer::from_writer(tmp.as_file());
    writer.write_record(HEADERS)?;
    for row in &existing {
        writer.write_record(row)?;
    }
    for record in records {
        writer.write_record([
            record.language.as_str(),
            record.translated_question.as_str(),
            record.chat_response.as_str(),
            record.back_translated.as_str(),
        ])?;
    }
    writer.flush()?;
    drop(writer);

    tmp.persist(path).map_err(|e| e.error)?;

    Ok(existing.len() + records.len())
}

/// Data rows of the existing table, header excluded. A missing or
/// unreadable file contributes nothing; bad trailing rows are dropped
/// rather than aborting the merge.
fn read_existing(path: &Path) -> Vec<Vec<String>> {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(_) => return Vec::new(),
    };
    reader
        .records()
        .filter_map(|row| row.ok())
        .map(|row| row.iter().map(str::to_string).collect())
        .collect()
}
