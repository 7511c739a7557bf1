//! Comma-separated exports with a header line.

use crate::table::{Cell, RawRow};
use anyhow::{Context, Result};
use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};
use tracing::warn;

/// Decode an export to text.
///
/// A byte-order mark decides the encoding when present. Otherwise valid UTF-8
/// is taken as is and anything else is read as Shift_JIS, the default of
/// Japanese spreadsheet software.
pub fn decode_bytes(bytes: &[u8]) -> String {
    let encoding: &'static Encoding =
        if Encoding::for_bom(bytes).is_some() || std::str::from_utf8(bytes).is_ok() {
            UTF_8
        } else {
            SHIFT_JIS
        };

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(encoding = used.name(), "lossy decode of delimited export");
    }
    text.into_owned()
}

/// Parse delimited text into rows keyed by header.
///
/// Cells are trimmed, quoted fields may contain commas, short lines read the
/// missing cells as empty and whitespace-only lines are skipped.
pub fn parse_delimited(text: &str) -> Result<Vec<RawRow>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    let mut skipped = 0;

    for (line_idx, result) in reader.records().enumerate() {
        let line_num = line_idx + 2; // +1 for 0-index, +1 for header

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(line = line_num, "skipping malformed CSV line: {}", e);
                skipped += 1;
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            continue;
        }

        let row: RawRow = headers
            .iter()
            .enumerate()
            .filter(|(_, header)| !header.is_empty())
            .map(|(idx, header)| (header.clone(), Cell::text(record.get(idx).unwrap_or(""))))
            .collect();
        rows.push(row);
    }

    if skipped > 0 {
        warn!(skipped, "some CSV lines could not be read");
    }

    Ok(rows)
}

/// Decode and parse a delimited export in one step.
pub fn parse_delimited_bytes(bytes: &[u8]) -> Result<Vec<RawRow>> {
    parse_delimited(&decode_bytes(bytes))
}
