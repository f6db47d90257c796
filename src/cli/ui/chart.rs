//! Text rendering of the per-project budget vs spent bar chart.

use crate::cli::ui::format::format_amount;
use crate::domain::BudgetEntry;

const BAR_WIDTH: usize = 40;

/// Renders one bar pair per entry, scaled against the largest budget or
/// spent amount in the view. Returns the chart line by line.
pub fn render_chart(entries: &[BudgetEntry]) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }
    let scale_max = entries
        .iter()
        .map(|entry| entry.budget.max(entry.spent))
        .fold(0.0_f64, f64::max);

    let mut lines = Vec::new();
    for entry in entries {
        let label = if entry.project_name.is_empty() {
            "(unnamed)"
        } else {
            entry.project_name.as_str()
        };
        lines.push(label.to_string());
        lines.push(format!(
            "  budget {} {}",
            bar(entry.budget, scale_max),
            format_amount(entry.budget)
        ));
        lines.push(format!(
            "  spent  {} {}",
            bar(entry.spent, scale_max),
            format_amount(entry.spent)
        ));
    }
    lines
}

fn bar(value: f64, scale_max: f64) -> String {
    if scale_max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / scale_max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.max(1))
}
