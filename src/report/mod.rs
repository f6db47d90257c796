pub mod filter;
pub mod summary;

pub use filter::{filter, list_distinct, DistinctField, Selector};
pub use summary::{summarize, ReportSummary};
