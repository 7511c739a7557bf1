//! JSON table responses (Google Visualization query format).
//!
//! A published sheet answers `tqx=out:json` queries with a JavaScript
//! callback wrapping the table:
//!
//! ```text
//! /*O_o*/
//! google.visualization.Query.setResponse({"table":{"cols":[...],"rows":[...]}});
//! ```
//!
//! Plain JSON (the same object, or a bare array of row objects) is accepted too.

use crate::table::{Cell, CellKind, RawRow};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};

static ENVELOPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)google\.visualization\.Query\.setResponse\((.*)\);").expect("Invalid regex")
});

#[derive(Debug, Deserialize)]
struct GvizResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    errors: Vec<GvizError>,
    #[serde(default)]
    table: Option<GvizTable>,
}

#[derive(Debug, Deserialize)]
struct GvizError {
    #[serde(default)]
    reason: String,
    #[serde(default)]
    detailed_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    cols: Vec<GvizColumn>,
    #[serde(default)]
    rows: Option<Vec<GvizRow>>,
}

#[derive(Debug, Deserialize)]
struct GvizColumn {
    #[serde(default)]
    label: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Value,
    #[serde(default)]
    f: Option<String>,
    #[serde(default)]
    t: Option<String>,
}

/// Strip the callback envelope, if any, and return the JSON body.
pub fn unwrap_envelope(text: &str) -> &str {
    ENVELOPE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or_else(|| text.trim())
}

/// Parse a JSON table response into rows keyed by column label.
pub fn parse_response(text: &str) -> Result<Vec<RawRow>> {
    let body = unwrap_envelope(text);
    let value: Value = serde_json::from_str(body).context("Failed to parse JSON table response")?;

    if let Value::Array(items) = value {
        return Ok(rows_from_objects(items));
    }

    let response: GvizResponse =
        serde_json::from_value(value).context("Unexpected JSON table structure")?;

    if response.status.as_deref() == Some("error") {
        let reasons: Vec<String> = response
            .errors
            .iter()
            .map(|e| match &e.detailed_message {
                Some(detail) => format!("{}: {}", e.reason, detail),
                None => e.reason.clone(),
            })
            .collect();
        anyhow::bail!("Table query returned an error: {}", reasons.join("; "));
    }

    let Some(GvizTable {
        cols,
        rows: Some(rows),
    }) = response.table
    else {
        warn!("JSON table response has no table rows");
        return Ok(Vec::new());
    };

    let headers: Vec<String> = cols
        .iter()
        .map(|c| c.label.as_deref().unwrap_or("").trim().to_string())
        .collect();
    debug!(?headers, "table headers");

    let column_kinds: Vec<CellKind> = cols
        .iter()
        .map(|c| c.kind.as_deref().map(CellKind::from_tag).unwrap_or_default())
        .collect();

    let rows = rows
        .into_iter()
        .map(|row| {
            let mut raw_row = RawRow::new();
            for (idx, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                let cell = match row.c.get(idx) {
                    Some(Some(cell)) => {
                        let kind = cell
                            .t
                            .as_deref()
                            .map(CellKind::from_tag)
                            .unwrap_or(column_kinds[idx]);
                        Cell::new(value_to_text(&cell.v, kind), cell.f.clone(), kind)
                    }
                    _ => Cell::default(),
                };
                raw_row.insert(header.clone(), cell);
            }
            raw_row
        })
        .collect();

    Ok(rows)
}

/// Rows from a bare JSON array of `{header: value}` objects.
fn rows_from_objects(items: Vec<Value>) -> Vec<RawRow> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(
                map.into_iter()
                    .map(|(header, value)| {
                        let kind = match value {
                            Value::Number(_) => CellKind::Number,
                            Value::Bool(_) => CellKind::Boolean,
                            _ => CellKind::String,
                        };
                        (header, Cell::new(value_to_text(&value, kind), None, kind))
                    })
                    .collect(),
            ),
            _ => None,
        })
        .collect()
}

/// Render a JSON cell value as text. Whole floats print without a fraction
/// (`13.0` reads as `13`); time-of-day arrays print as `h:mm:ss`.
fn value_to_text(value: &Value, kind: CellKind) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_to_text(n)),
        Value::Array(parts) if kind == CellKind::TimeOfDay => {
            let part = |i: usize| parts.get(i).and_then(Value::as_u64).unwrap_or(0);
            Some(format!("{}:{:02}:{:02}", part(0), part(1), part(2)))
        }
        other => Some(other.to_string()),
    }
}

fn number_to_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"/*O_o*/
google.visualization.Query.setResponse({"version":"0.6","reqId":"0","status":"ok","table":{"cols":[{"id":"A","label":"#","type":"number"},{"id":"B","label":"タイトル","type":"string"},{"id":"C","label":"投稿日","type":"date"},{"id":"D","label":"","type":"string"},{"id":"E","label":"再生数","type":"number"}],"rows":[{"c":[{"v":1.0,"f":"1"},{"v":"First video"},{"v":"Date(2020,8,11)","f":"2020/09/11"},{"v":"ignored"},{"v":12345.0,"f":"12,345"}]},{"c":[{"v":2.0},null,{"v":null},null,{"v":7.0}]}],"parsedNumHeaders":1}});"##;

    // -------------------------------------------------------------------------
    // ENVELOPE TESTS
    // -------------------------------------------------------------------------

    #[test]
    fn test_unwrap_envelope() {
        let body = unwrap_envelope("/*O_o*/\ngoogle.visualization.Query.setResponse({\"a\":1});");
        assert_eq!(body, "{\"a\":1}");
    }

    #[test]
    fn test_unwrap_plain_json() {
        assert_eq!(unwrap_envelope("  {\"a\":1}\n"), "{\"a\":1}");
    }

    // -------------------------------------------------------------------------
    // TABLE TESTS
    // -------------------------------------------------------------------------

    #[test]
    fn test_parse_rows_keyed_by_label() {
        let rows = parse_response(SAMPLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].value("#"), Some("1"));
        assert_eq!(rows[0].value("タイトル"), Some("First video"));
        assert_eq!(rows[0].value("投稿日"), Some("2020/09/11"));
        assert_eq!(rows[0].value("再生数"), Some("12,345"));
    }

    #[test]
    fn test_unlabelled_columns_skipped() {
        let rows = parse_response(SAMPLE).unwrap();
        assert!(rows[0].headers().all(|h| !h.is_empty()));
        assert_eq!(rows[0].len(), 4);
    }

    #[test]
    fn test_null_cells_resolve_empty() {
        let rows = parse_response(SAMPLE).unwrap();
        assert_eq!(rows[1].value("タイトル"), Some(""));
        assert_eq!(rows[1].value("投稿日"), Some(""));
        assert_eq!(rows[1].value("再生数"), Some("7"));
    }

    #[test]
    fn test_cell_type_tag_overrides_column_type() {
        let text = r#"{"table":{"cols":[{"label":"n","type":"string"}],"rows":[{"c":[{"v":"5","f":"five","t":"n"}]}]}}"#;
        let rows = parse_response(text).unwrap();
        assert_eq!(rows[0].value("n"), Some("five"));
    }

    #[test]
    fn test_time_of_day_array() {
        let text = r#"{"table":{"cols":[{"label":"動画尺","type":"timeofday"}],"rows":[{"c":[{"v":[0,6,59,0]}]}]}}"#;
        let rows = parse_response(text).unwrap();
        assert_eq!(rows[0].value("動画尺"), Some("0:06:59"));
    }

    #[test]
    fn test_missing_rows_yield_empty() {
        let rows = parse_response(r#"{"table":{"cols":[]}}"#).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_error_status_fails() {
        let text = r#"{"status":"error","errors":[{"reason":"access_denied","detailed_message":"Sheet is private"}]}"#;
        let err = parse_response(text).unwrap_err();
        assert!(err.to_string().contains("access_denied"));
    }

    #[test]
    fn test_invalid_json_fails() {
        assert!(parse_response("<html>not json</html>").is_err());
    }

    // -------------------------------------------------------------------------
    // PLAIN ARRAY TESTS
    // -------------------------------------------------------------------------

    #[test]
    fn test_plain_array_of_objects() {
        let rows = parse_response(r#"[{"id": 3, "title": "x", "ok": true}, 5]"#).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value("id"), Some("3"));
        assert_eq!(rows[0].value("title"), Some("x"));
        assert_eq!(rows[0].value("ok"), Some("true"));
    }
}
