use anyhow::{bail, Context, Result};
use encoding_rs::WINDOWS_1252;
use tracing::info;

use crate::models::job::JobRow;

/// Reads the job description dataset from a CSV file.
///
/// The file must carry at least the `Job Title` and `Job Description`
/// columns. Any malformed row is fatal: there is no partial-corpus
/// fallback, the process refuses to start instead.
pub fn read_rows(path: &str) -> Result<Vec<JobRow>> {
    let raw = std::fs::read(path)
        .with_context(|| format!("failed to read job description dataset at '{path}'"))?;
    let text = decode_dataset(&raw);

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<JobRow>().enumerate() {
        let row = record.with_context(|| format!("malformed dataset row {}", index + 1))?;
        rows.push(row);
    }

    if rows.is_empty() {
        bail!("job description dataset at '{path}' contains no postings");
    }

    info!("Loaded {} job postings from {path}", rows.len());
    Ok(rows)
}

/// Decodes raw dataset bytes. Published job description datasets are often
/// Latin-1 rather than UTF-8, so non-UTF-8 input falls back to Windows-1252
/// (the WHATWG superset of ISO-8859-1).
fn decode_dataset(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(raw);
            text.into_owned()
        }
    }
}
