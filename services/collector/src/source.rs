//! Where a table comes from, and in which format.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const WORKBOOK_EXTENSIONS: &[&str] = &[".xlsx", ".xlsm", ".xls", ".xlsb", ".ods"];

/// A table location together with the reader it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// JSON table response, usually a published sheet's `gviz/tq` endpoint.
    JsonTable { location: String },
    /// Comma-separated export with a header line.
    Delimited { location: String },
    /// Local workbook file, optionally naming the sheet to read.
    Workbook { path: PathBuf, sheet: Option<String> },
}

/// True for `http://` and `https://` locations.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn is_json_table(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    let path = lower.split(['?', '#']).next().unwrap_or("");
    lower.contains("/gviz/") || lower.contains("tqx=out:json") || path.ends_with(".json")
}

impl TableSource {
    /// Pick a reader from the shape of the location.
    ///
    /// Workbook paths may carry a sheet name after `#`, e.g.
    /// `exports/channel.xlsx#comments`.
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();

        if is_json_table(location) {
            return TableSource::JsonTable {
                location: location.to_string(),
            };
        }

        if !is_remote(location) {
            let (path, sheet) = match location.rsplit_once('#') {
                Some((path, sheet)) if !sheet.is_empty() => (path, Some(sheet.to_string())),
                _ => (location, None),
            };
            let lower = path.to_ascii_lowercase();
            if WORKBOOK_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
                return TableSource::Workbook {
                    path: PathBuf::from(path),
                    sheet,
                };
            }
        }

        TableSource::Delimited {
            location: location.to_string(),
        }
    }

    pub fn format_name(&self) -> &'static str {
        match self {
            TableSource::JsonTable { .. } => "json-table",
            TableSource::Delimited { .. } => "csv",
            TableSource::Workbook { .. } => "workbook",
        }
    }
}

impl FromStr for TableSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("empty source location".to_string());
        }
        Ok(TableSource::from_location(s))
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::JsonTable { location } | TableSource::Delimited { location } => {
                write!(f, "{}", location)
            }
            TableSource::Workbook { path, sheet } => match sheet {
                Some(sheet) => write!(f, "{}#{}", path.display(), sheet),
                None => write!(f, "{}", path.display()),
            },
        }
    }
}
