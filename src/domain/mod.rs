pub mod entry;

pub use entry::{BudgetEntry, RawEntryInput};
