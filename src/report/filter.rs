use std::fmt;

use crate::domain::BudgetEntry;

/// Sentinel value meaning "no restriction on this dimension".
pub const ALL_SENTINEL: &str = "all";

/// One dimension of the (year, project) filter pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    All,
    Value(String),
}

impl Selector {
    /// Parses a selector argument. The literal `all` is the sentinel;
    /// anything else is an exact-match value.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_SENTINEL {
            Selector::All
        } else {
            Selector::Value(raw.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Value(wanted) => wanted == value,
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::All
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "{}", ALL_SENTINEL),
            Selector::Value(value) => write!(f, "{}", value),
        }
    }
}

/// Grouping dimensions a distinct-value listing can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistinctField {
    Year,
    ProjectName,
}

/// Distinct non-empty values for the given field, in first-seen order.
pub fn list_distinct(entries: &[BudgetEntry], field: DistinctField) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for entry in entries {
        let value = match field {
            DistinctField::Year => &entry.year,
            DistinctField::ProjectName => &entry.project_name,
        };
        if value.is_empty() {
            continue;
        }
        if !seen.iter().any(|existing| existing == value) {
            seen.push(value.clone());
        }
    }
    seen
}

/// Stable filter over both dimensions; an entry passes only when each
/// selector accepts it. A selector value absent from the collection simply
/// yields an empty result.
pub fn filter(entries: &[BudgetEntry], year: &Selector, project: &Selector) -> Vec<BudgetEntry> {
    entries
        .iter()
        .filter(|entry| year.matches(&entry.year) && project.matches(&entry.project_name))
        .cloned()
        .collect()
}
