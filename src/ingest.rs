//! The single boundary converting untrusted form input into validated
//! entries. Coercion never fails: unparseable or non-finite amounts become
//! zero, matching the tool's accept-everything ingestion contract.

use crate::domain::{BudgetEntry, RawEntryInput};

/// Parses a free-form amount, coercing absence or garbage to zero.
pub fn coerce_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Builds a validated entry from form input. Derived fields come from
/// [`BudgetEntry::new`]; the grouping keys pass through unvalidated.
pub fn build_entry(input: RawEntryInput) -> BudgetEntry {
    BudgetEntry::new(
        input.year,
        input.project_name,
        coerce_amount(&input.budget),
        coerce_amount(&input.spent),
        coerce_amount(&input.returned),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(coerce_amount("1000"), 1000.0);
        assert_eq!(coerce_amount("  42.5 "), 42.5);
        assert_eq!(coerce_amount("-5"), -5.0);
    }

    #[test]
    fn garbage_and_absence_coerce_to_zero() {
        assert_eq!(coerce_amount(""), 0.0);
        assert_eq!(coerce_amount("abc"), 0.0);
        assert_eq!(coerce_amount("12abc"), 0.0);
        assert_eq!(coerce_amount("NaN"), 0.0);
        assert_eq!(coerce_amount("inf"), 0.0);
    }

    #[test]
    fn builds_entry_with_derived_fields() {
        let input = RawEntryInput {
            year: "2568".into(),
            project_name: "B".into(),
            budget: "0".into(),
            spent: "50".into(),
            returned: "0".into(),
        };
        let entry = build_entry(input);
        assert_eq!(entry.budget, 0.0);
        assert_eq!(entry.spent, 50.0);
        assert_eq!(entry.remaining, -50.0);
        assert_eq!(entry.spent_percentage, 0.0);
        assert!(entry.spent_percentage.is_finite());
    }

    #[test]
    fn empty_grouping_keys_pass_through() {
        let entry = build_entry(RawEntryInput::default());
        assert_eq!(entry.year, "");
        assert_eq!(entry.project_name, "");
        assert_eq!(entry.budget, 0.0);
    }
}
