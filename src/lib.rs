#![doc(test(attr(deny(warnings))))]

//! Budget Report tracks fiscal-year budget allocations per project and powers
//! an interactive reporting shell with filtered totals, tables, and charts.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod ingest;
pub mod report;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Report tracing initialized.");
    });
}
