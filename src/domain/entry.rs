use serde::{Deserialize, Serialize};

/// A validated budget record for one (fiscal year, project) pair.
///
/// The derived fields `remaining` and `spent_percentage` are computed at
/// construction time and never mutated independently afterwards; entries are
/// append-only and replaced wholesale rather than edited in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEntry {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub returned: f64,
    #[serde(default)]
    pub remaining: f64,
    #[serde(default)]
    pub spent_percentage: f64,
}

impl BudgetEntry {
    /// Builds an entry from raw amounts, deriving `remaining` and
    /// `spent_percentage`. Total: a zero budget yields the `0.0` percentage
    /// sentinel instead of a NaN or infinite value.
    pub fn new(
        year: impl Into<String>,
        project_name: impl Into<String>,
        budget: f64,
        spent: f64,
        returned: f64,
    ) -> Self {
        let remaining = budget - spent - returned;
        let spent_percentage = if budget == 0.0 {
            0.0
        } else {
            (spent / budget) * 100.0
        };
        Self {
            year: year.into(),
            project_name: project_name.into(),
            budget,
            spent,
            returned,
            remaining,
            spent_percentage,
        }
    }

    /// True when the percentage sentinel stands in for an undefined ratio.
    pub fn has_undefined_percentage(&self) -> bool {
        self.budget == 0.0
    }
}

/// Untrusted add-entry form input. Amounts stay free-form text until the
/// ingestion boundary coerces them; `year` and `project_name` pass through
/// as given, empty strings included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntryInput {
    pub year: String,
    pub project_name: String,
    pub budget: String,
    pub spent: String,
    pub returned: String,
}
