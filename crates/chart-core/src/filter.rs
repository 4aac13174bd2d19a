// File: crates/chart-core/src/filter.rs
// Summary: Course-name search filter (case-insensitive substring, exact for reserved ids).

use crate::record::Record;

/// Terms matched by equality instead of substring, so that `dsc10` does not
/// also select `dsc100`, `dsc101`, ...
pub const DEFAULT_EXACT_TERMS: &[&str] = &["dsc10"];

/// Trimmed, lowercased search term.
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameFilter {
    term: String,
    exact: bool,
}

impl NameFilter {
    pub fn new<S: AsRef<str>>(term: &str, exact_terms: &[S]) -> Self {
        let term = normalize(term);
        let exact = !term.is_empty() && exact_terms.iter().any(|t| normalize(t.as_ref()) == term);
        Self { term, exact }
    }

    pub fn term(&self) -> &str { &self.term }
    pub fn is_exact(&self) -> bool { self.exact }
    pub fn is_empty(&self) -> bool { self.term.is_empty() }

    pub fn matches(&self, name: &str) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let name = name.to_lowercase();
        if self.exact { name == self.term } else { name.contains(&self.term) }
    }

    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(&r.name)).collect()
    }
}

/// Filter with the default reserved exact terms.
pub fn filter<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    NameFilter::new(term, DEFAULT_EXACT_TERMS).apply(records)
}

pub fn filter_with<'a, S: AsRef<str>>(records: &'a [Record], term: &str, exact_terms: &[S]) -> Vec<&'a Record> {
    NameFilter::new(term, exact_terms).apply(records)
}
