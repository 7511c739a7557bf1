//! Collector - Reads raw tables from published sheets and spreadsheet exports
//!
//! Responsibilities:
//! - Fetch JSON table responses (published sheet queries) over HTTP
//! - Read comma-separated exports, sniffing their text encoding
//! - Read local workbooks (xlsx, xls, xlsb, ods)
//! - Yield rows keyed by column header, keeping raw and formatted cell values

pub mod delimited;
pub mod fetch;
pub mod gviz;
pub mod source;
pub mod table;
pub mod workbook;

pub use fetch::{FetchConfig, Fetcher, LoadedTable, Payload};
pub use source::TableSource;
pub use table::{Cell, CellKind, RawRow};
