// File: crates/chart-core/src/data.rs
// Summary: CSV sources and typed row parsing with explicit keep/skip outcomes.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::{info, warn};

use crate::error::{ChartError, ChartResult};

/// Where CSV text comes from. Fetches are not retried.
pub trait CsvSource {
    fn fetch(&self, path: &str) -> ChartResult<String>;
}

/// Reads files relative to a data directory.
#[derive(Clone, Debug)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CsvSource for FileSource {
    fn fetch(&self, path: &str) -> ChartResult<String> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|e| ChartError::data_load(full.display().to_string(), e))
    }
}

/// In-memory CSV text keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }
}

impl CsvSource for MemorySource {
    fn fetch(&self, path: &str) -> ChartResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ChartError::data_load(path, "not found"))
    }
}

/// Header row with trimmed column names.
#[derive(Clone, Debug)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    pub fn new(record: &StringRecord) -> Self {
        let names = record
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// One data record viewed through its header.
pub struct RawRow<'a> {
    header: &'a Header,
    record: &'a StringRecord,
    line: u64,
}

impl<'a> RawRow<'a> {
    pub fn new(header: &'a Header, record: &'a StringRecord, line: u64) -> Self {
        Self { header, record, line }
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    /// Trimmed cell under `name`; `None` when the column or the cell is missing.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        let i = self.header.index(name)?;
        self.record.get(i).map(str::trim)
    }

    /// Like [`RawRow::get`] but blank cells count as missing.
    pub fn non_empty(&self, name: &str) -> Option<&'a str> {
        self.get(name).filter(|s| !s.is_empty())
    }

    /// Numeric cell; blank or unparsable cells are `None`.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(parse_number)
    }

    /// Every (column, cell) pair in header order.
    pub fn columns(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        let header: &'a Header = self.header;
        let record: &'a StringRecord = self.record;
        header
            .names
            .iter()
            .enumerate()
            .map(move |(i, n)| (n.as_str(), record.get(i).map(str::trim).unwrap_or("")))
    }
}

/// Result of parsing one record.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseOutcome<T> {
    Row(T),
    Skipped(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Clone, Debug)]
pub struct ParsedRows<T> {
    pub rows: Vec<T>,
    pub skipped: Vec<SkippedRow>,
}

/// Typed row with a pure parse function.
pub trait RowSchema: Sized {
    /// Columns whose absence fails the whole load.
    const REQUIRED: &'static [&'static str];

    fn parse(row: &RawRow<'_>) -> ParseOutcome<Self>;

    /// Post-processing over the kept rows (ordering).
    fn finish(_rows: &mut Vec<Self>) {}
}

/// Numeric cast of a trimmed cell. Blank, unparsable and non-finite values are `None`.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Drop everything but digits, `.` and `-` (currency symbols, units, separators).
pub fn strip_non_numeric(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-').collect()
}

/// Parse CSV text with a header row into typed rows.
pub fn parse_csv<T: RowSchema>(path: &str, text: &str) -> ChartResult<ParsedRows<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let header = Header::new(rdr.headers().map_err(|e| ChartError::data_load(path, e))?);
    if header.names().iter().all(|n| n.is_empty()) {
        return Err(ChartError::data_load(path, "missing header row"));
    }
    for col in T::REQUIRED {
        if header.index(col).is_none() {
            return Err(ChartError::data_load(path, format!("missing column `{col}`")));
        }
    }

    let mut rows = Vec::new();
    let mut skipped = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| ChartError::data_load(path, e))?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        match T::parse(&RawRow::new(&header, &rec, line)) {
            ParseOutcome::Row(row) => rows.push(row),
            ParseOutcome::Skipped(reason) => {
                warn!(path, line, %reason, "skipping row");
                skipped.push(SkippedRow { line, reason });
            }
        }
    }
    T::finish(&mut rows);
    Ok(ParsedRows { rows, skipped })
}

/// Fetch `path` from `source` and parse it.
pub fn load<T: RowSchema>(source: &dyn CsvSource, path: &str) -> ChartResult<ParsedRows<T>> {
    let text = source.fetch(path)?;
    let parsed = parse_csv::<T>(path, &text)?;
    info!(path, rows = parsed.rows.len(), skipped = parsed.skipped.len(), "loaded csv");
    Ok(parsed)
}
