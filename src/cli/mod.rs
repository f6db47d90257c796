pub mod core;
pub mod forms;
pub mod output;
pub mod registry;
mod shell;
pub mod ui;

pub use shell::run_cli;
