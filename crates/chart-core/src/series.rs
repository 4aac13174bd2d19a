// File: crates/chart-core/src/series.rs
// Summary: Per-course series and the grouper that builds them in first-occurrence order.

use std::collections::HashMap;

use crate::record::Record;

/// Ordered points belonging to one course.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub key: String,
    pub points: Vec<Record>,
}

impl Series {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), points: Vec::new() }
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// `(time_ms, value)` for every point with both fields valid, in point order.
    pub fn plottable(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .filter(|r| r.has_value())
            .filter_map(|r| r.time_ms().map(|t| (t, r.waitlisted)))
    }

    /// Stable chronological order; points without a time keep their relative
    /// order after all timed points.
    pub fn sorted_by_time(mut self) -> Self {
        self.points.sort_by(|a, b| match (a.time, b.time) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        self
    }
}

/// Partition records by course name. Group order is the order in which each
/// name first appears; point order inside a group is input order.
pub fn group<'a, I>(records: I) -> Vec<Series>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut out: Vec<Series> = Vec::new();
    for r in records {
        let slot = *slots.entry(r.name.as_str()).or_insert_with(|| {
            out.push(Series::new(r.name.as_str()));
            out.len() - 1
        });
        out[slot].points.push(r.clone());
    }
    out
}

/// Distinct course names in first-occurrence order.
pub fn distinct_names<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for r in records {
        if seen.insert(r.name.as_str()) {
            out.push(r.name.clone());
        }
    }
    out
}
