// File: crates/chart-core/src/record.rs
// Summary: Record model (one CSV row) and tolerant CSV decoding.
// Notes:
// - Field parse failures never reject a row: an unparseable time becomes `None`
//   and an unparseable count becomes NaN. Both are skipped downstream.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{ChartError, Result};

/// Timestamp layout of the `time` column.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Header names the loader requires.
pub const COLUMN_TIME: &str = "time";
pub const COLUMN_NAME: &str = "name";
pub const COLUMN_WAITLISTED: &str = "waitlisted";

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub time: Option<NaiveDateTime>,
    pub name: String,
    /// Waitlist count; NaN when the source field was not numeric.
    pub waitlisted: f64,
}

impl Record {
    pub fn new(time: Option<NaiveDateTime>, name: impl Into<String>, waitlisted: f64) -> Self {
        Self { time, name: name.into(), waitlisted }
    }

    /// Build a record from raw string fields.
    pub fn parse(time: &str, name: &str, waitlisted: &str) -> Self {
        Self { time: parse_time(time), name: name.to_string(), waitlisted: parse_count(waitlisted) }
    }

    pub fn has_time(&self) -> bool { self.time.is_some() }
    pub fn has_value(&self) -> bool { !self.waitlisted.is_nan() }

    /// Both coordinates are usable for drawing.
    pub fn is_plottable(&self) -> bool { self.has_time() && self.has_value() }

    /// Milliseconds since the Unix epoch, the time scale's domain unit.
    pub fn time_ms(&self) -> Option<f64> {
        self.time.map(|t| t.and_utc().timestamp_millis() as f64)
    }
}

pub fn parse_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIME_FORMAT).ok()
}

/// Parse the leading integer of `s` (`"7"`, `" 12 "`, `"7.9"` -> 7).
/// Returns NaN when there is no leading integer (`"N/A"`, `""`) or the
/// count is negative; `"-0"` reads as 0.
pub fn parse_count(s: &str) -> f64 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return f64::NAN;
    }
    digits[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| sign * v)
        .filter(|v| *v >= 0.0)
        .map(f64::abs)
        .unwrap_or(f64::NAN)
}

/// Decode a `time,name,waitlisted` CSV stream. Extra columns are ignored,
/// rows with an empty name are dropped.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let idx = |want: &'static str| -> Result<usize> {
        headers.iter().position(|h| h == want).ok_or(ChartError::MissingColumn(want))
    };
    let i_time = idx(COLUMN_TIME)?;
    let i_name = idx(COLUMN_NAME)?;
    let i_wait = idx(COLUMN_WAITLISTED)?;

    let mut out = Vec::new();
    let mut dropped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("");
        let name = field(i_name).trim();
        if name.is_empty() {
            tracing::warn!(row = row + 1, "dropping row with empty course name");
            dropped += 1;
            continue;
        }
        out.push(Record::parse(field(i_time), name, field(i_wait)));
    }

    let bad_time = out.iter().filter(|r| !r.has_time()).count();
    let bad_value = out.iter().filter(|r| !r.has_value()).count();
    tracing::debug!(rows = out.len(), dropped, bad_time, bad_value, "decoded waitlist csv");
    Ok(out)
}

pub fn read_records_from_str(text: &str) -> Result<Vec<Record>> {
    read_records(text.as_bytes())
}

pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path.as_ref())?;
    read_records(std::io::BufReader::new(file))
}
