use crate::domain::BudgetEntry;

/// Collection-wide totals over a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    pub total_returned: f64,
    pub total_remaining: f64,
}

/// Sums the raw amounts across entries. `total_remaining` is the sum of the
/// per-entry `budget - spent - returned` differences, so an entry whose
/// fields defaulted to zero contributes zero instead of skewing the total.
pub fn summarize(entries: &[BudgetEntry]) -> ReportSummary {
    let mut summary = ReportSummary::default();
    for entry in entries {
        summary.total_budget += entry.budget;
        summary.total_spent += entry.spent;
        summary.total_returned += entry.returned;
        summary.total_remaining += entry.budget - entry.spent - entry.returned;
    }
    summary
}
