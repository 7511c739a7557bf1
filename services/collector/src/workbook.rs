//! Local spreadsheet workbooks (xlsx, xls, xlsb, ods).
//!
//! The first row of the sheet is the header row. Date and time cells are
//! rendered the way published sheets render them: a structured
//! `Date(year,monthZeroBased,day[,hour,minute,second])` raw value plus a
//! formatted display string.

use crate::table::{Cell, CellKind, RawRow};
use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static ISO_DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)(?:\.\d+)?S)?)?$")
        .expect("Invalid regex")
});

/// Read one sheet of a workbook into rows keyed by header.
/// Without an explicit sheet name the first sheet is used.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                anyhow::bail!(
                    "Sheet '{}' not found in {}. Available: {:?}",
                    name,
                    path.display(),
                    sheet_names
                );
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .context("Workbook has no sheets")?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet '{}'", sheet_name))?;

    let (row_count, col_count) = range.get_size();
    info!(sheet = %sheet_name, rows = row_count, cols = col_count, "reading workbook sheet");

    let mut sheet_rows = range.rows();
    let Some(header_row) = sheet_rows.next() else {
        return Ok(Vec::new());
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| match cell {
            Data::Empty => String::new(),
            other => other.to_string().trim().to_string(),
        })
        .collect();

    let rows = sheet_rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| !header.is_empty())
                .map(|(idx, header)| {
                    let cell = row.get(idx).map(data_to_cell).unwrap_or_default();
                    (header.clone(), cell)
                })
                .collect::<RawRow>()
        })
        .collect();

    Ok(rows)
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::default(),
        Data::String(s) => Cell::text(s.as_str()),
        Data::Int(i) => Cell::new(Some(i.to_string()), None, CellKind::Number),
        Data::Float(f) => Cell::new(Some(float_text(*f)), None, CellKind::Number),
        Data::Bool(b) => Cell::new(Some(b.to_string()), None, CellKind::Boolean),
        Data::DateTime(dt) if dt.is_duration() => serial_duration_cell(dt.as_f64()),
        Data::DateTime(dt) => serial_cell(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::new(Some(s.clone()), None, CellKind::DateTime),
        Data::DurationIso(s) => match iso_duration_seconds(s) {
            Some(total) => duration_cell(total),
            None => Cell::new(Some(s.clone()), None, CellKind::TimeOfDay),
        },
        Data::Error(e) => {
            debug!(error = ?e, "cell error value read as empty");
            Cell::default()
        }
    }
}

fn float_text(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// Convert a spreadsheet serial (days since 1899-12-30) to a date-time,
/// rounded to the second.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial.abs() > 3_000_000.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let seconds = (serial * 86_400.0).round() as i64;
    epoch.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Structured `Date(...)` encoding with a zero-based month.
pub fn structured_encoding(dt: &NaiveDateTime) -> String {
    if dt.time().num_seconds_from_midnight() == 0 {
        format!("Date({},{},{})", dt.year(), dt.month0(), dt.day())
    } else {
        format!(
            "Date({},{},{},{},{},{})",
            dt.year(),
            dt.month0(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        )
    }
}

/// `h:mm:ss` cell for an elapsed time. Hours are not wrapped at 24.
pub fn duration_cell(total_seconds: u64) -> Cell {
    let text = format!(
        "{}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    );
    Cell::new(Some(text.clone()), Some(text), CellKind::TimeOfDay)
}

/// A serial the sheet formats as elapsed time (`[h]:mm:ss`), which may
/// exceed one day.
pub fn serial_duration_cell(serial: f64) -> Cell {
    if !serial.is_finite() || serial < 0.0 {
        return Cell::new(Some(float_text(serial)), None, CellKind::Number);
    }
    duration_cell((serial * 86_400.0).round() as u64)
}

/// Seconds of an ISO 8601 duration such as `PT6M59S` or `P1DT2H`.
/// Fractional seconds are dropped.
pub fn iso_duration_seconds(value: &str) -> Option<u64> {
    let caps = ISO_DURATION_RE.captures(value.trim())?;
    let part = |idx: usize| -> Option<u64> {
        caps.get(idx).map_or(Some(0), |m| m.as_str().parse().ok())
    };
    let total = part(1)? * 86_400 + part(2)? * 3600 + part(3)? * 60 + part(4)?;
    Some(total)
}

/// A cell for a date/time serial. Serials below one day are times of day.
pub fn serial_cell(serial: f64) -> Cell {
    let Some(dt) = serial_to_datetime(serial) else {
        return Cell::new(Some(float_text(serial)), None, CellKind::Number);
    };

    let raw = Some(structured_encoding(&dt));
    if (0.0..1.0).contains(&serial) {
        let formatted = format!("{}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second());
        Cell::new(raw, Some(formatted), CellKind::TimeOfDay)
    } else if dt.time().num_seconds_from_midnight() == 0 {
        Cell::new(raw, Some(dt.format("%Y/%m/%d").to_string()), CellKind::Date)
    } else {
        Cell::new(
            raw,
            Some(dt.format("%Y/%m/%d %H:%M").to_string()),
            CellKind::DateTime,
        )
    }
}
