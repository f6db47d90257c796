use crate::domain::BudgetEntry;

/// Formats an amount with thousands separators, keeping up to two decimal
/// places when the value is not integral.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let int_part = abs.trunc() as u64;
    let cents = (abs.fract() * 100.0).round() as u64;

    let mut out = group_digits(&int_part.to_string());
    if cents > 0 {
        out.push_str(&format!(".{:02}", cents));
    }
    if negative {
        out.insert(0, '-');
    }
    out
}

/// Disbursement percentage for display. Entries with a zero budget carry the
/// sentinel percentage and render as "N/A" instead of a number.
pub fn format_percentage(entry: &BudgetEntry) -> String {
    if entry.has_undefined_percentage() {
        "N/A".to_string()
    } else {
        format!("{:.2}%", entry.spent_percentage)
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
