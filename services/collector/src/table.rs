//! Raw tabular rows as delivered by a source, before any field mapping.

use serde::Serialize;
use std::collections::BTreeMap;

/// Type tag attached to a cell by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    String,
    Number,
    Date,
    DateTime,
    TimeOfDay,
    Boolean,
}

impl CellKind {
    /// Parse a type tag from either the long (`number`) or the one-letter
    /// (`n`) spelling. Unknown tags read as plain strings.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "number" | "n" => CellKind::Number,
            "date" | "d" => CellKind::Date,
            "datetime" => CellKind::DateTime,
            "timeofday" => CellKind::TimeOfDay,
            "boolean" | "b" => CellKind::Boolean,
            _ => CellKind::String,
        }
    }

    /// Numbers, dates and times carry locale formatting worth keeping.
    pub fn prefers_formatted(self) -> bool {
        matches!(
            self,
            CellKind::Number | CellKind::Date | CellKind::DateTime | CellKind::TimeOfDay
        )
    }
}

/// One cell: the underlying value and, optionally, the display string the
/// spreadsheet rendered for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Cell {
    pub raw: Option<String>,
    pub formatted: Option<String>,
    pub kind: CellKind,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            raw: Some(value.into()),
            formatted: None,
            kind: CellKind::String,
        }
    }

    pub fn new(raw: Option<String>, formatted: Option<String>, kind: CellKind) -> Self {
        Self {
            raw,
            formatted,
            kind,
        }
    }

    /// The string the normalizer should see for this cell.
    ///
    /// A formatted string wins for numeric and date cells; otherwise the raw
    /// value is used, then the formatted string, then the empty string.
    pub fn resolve(&self) -> &str {
        match (&self.raw, &self.formatted) {
            (Some(_), Some(formatted)) if self.kind.prefers_formatted() => formatted,
            (Some(raw), _) => raw,
            (None, Some(formatted)) => formatted,
            (None, None) => "",
        }
    }
}

/// A data row keyed by column header. Duplicate headers keep the last cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawRow {
    cells: BTreeMap<String, Cell>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, cell: Cell) {
        self.cells.insert(header.into(), cell);
    }

    /// Resolved value of the cell under `header`, if the column exists.
    pub fn value(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(Cell::resolve)
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Cell)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, Cell)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (header, cell) in iter {
            row.insert(header, cell);
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_preferred_for_numbers() {
        let cell = Cell::new(
            Some("12345".to_string()),
            Some("12,345".to_string()),
            CellKind::Number,
        );
        assert_eq!(cell.resolve(), "12,345");
    }

    #[test]
    fn test_formatted_preferred_for_dates() {
        let cell = Cell::new(
            Some("Date(2020,8,11)".to_string()),
            Some("2020/09/11".to_string()),
            CellKind::Date,
        );
        assert_eq!(cell.resolve(), "2020/09/11");
    }

    #[test]
    fn test_raw_preferred_for_strings() {
        let cell = Cell::new(
            Some("hello".to_string()),
            Some("HELLO".to_string()),
            CellKind::String,
        );
        assert_eq!(cell.resolve(), "hello");
    }

    #[test]
    fn test_formatted_used_when_raw_missing() {
        let cell = Cell::new(None, Some("0:06:59".to_string()), CellKind::TimeOfDay);
        assert_eq!(cell.resolve(), "0:06:59");
    }

    #[test]
    fn test_empty_cell_resolves_to_empty_string() {
        assert_eq!(Cell::default().resolve(), "");
    }

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(CellKind::from_tag("n"), CellKind::Number);
        assert_eq!(CellKind::from_tag("number"), CellKind::Number);
        assert_eq!(CellKind::from_tag("d"), CellKind::Date);
        assert_eq!(CellKind::from_tag("datetime"), CellKind::DateTime);
        assert_eq!(CellKind::from_tag("s"), CellKind::String);
        assert_eq!(CellKind::from_tag("whatever"), CellKind::String);
    }

    #[test]
    fn test_row_value_lookup() {
        let row: RawRow = [("title", Cell::text("A")), ("#", Cell::text("1"))]
            .into_iter()
            .collect();
        assert_eq!(row.value("title"), Some("A"));
        assert_eq!(row.value("#"), Some("1"));
        assert_eq!(row.value("missing"), None);
        assert_eq!(row.len(), 2);
    }
}
