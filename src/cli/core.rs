//! Shell context, command dispatch, and the command handlers themselves.

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    domain::{BudgetEntry, RawEntryInput},
    errors::StoreError,
    ingest,
    report::{filter, list_distinct, summarize, DistinctField, Selector},
    store::SnapshotStore,
};

use super::forms;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
use super::ui::chart::render_chart;
use super::ui::format::{format_amount, format_percentage};
use super::ui::table::{Alignment, Table, TableColumn};

/// How the shell consumes its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<LoopControl, CommandError>;
pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Failure of a single command; the shell reports it and keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    UnknownCommand(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Input error: {0}")]
    Dialog(#[from] dialoguer::Error),
}

/// Failure that tears the shell down.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Input error: {0}")]
    Dialog(#[from] dialoguer::Error),
}

/// Shared shell runtime state: the loaded entry collection, the two filter
/// selectors, and the snapshot store handle. All mutation flows through
/// command handlers; nothing else holds the collection.
pub struct ShellContext {
    mode: CliMode,
    registry: CommandRegistry,
    store: SnapshotStore,
    theme: ColorfulTheme,
    pub entries: Vec<BudgetEntry>,
    pub year_filter: Selector,
    pub project_filter: Selector,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let store = SnapshotStore::new_default()?;
        Ok(Self::with_store(mode, store))
    }

    /// Builds a context over an explicit store; load happens here, once.
    pub fn with_store(mode: CliMode, store: SnapshotStore) -> Self {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        let entries = store.load();
        Self {
            mode,
            registry,
            store,
            theme: ColorfulTheme::default(),
            entries,
            year_filter: Selector::All,
            project_filter: Selector::All,
        }
    }

    pub fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Prompt string reflecting the active selectors.
    pub fn prompt(&self) -> String {
        format!("budget-report ({} | {})> ", self.year_filter, self.project_filter)
    }

    /// The entries visible under the active selectors.
    pub fn filtered(&self) -> Vec<BudgetEntry> {
        filter(&self.entries, &self.year_filter, &self.project_filter)
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        let Some(handler) = self.registry.handler(command) else {
            let message = match self.suggest_command(command) {
                Some(suggestion) => format!(
                    "Unknown command `{}`. Did you mean `{}`?",
                    command, suggestion
                ),
                None => format!(
                    "Unknown command `{}`. Type `help` for the command list.",
                    command
                ),
            };
            return Err(CommandError::UnknownCommand(message));
        };
        handler(self, args)
    }

    fn suggest_command(&self, command: &str) -> Option<&'static str> {
        self.registry
            .names()
            .into_iter()
            .map(|name| (levenshtein(name, command), name))
            .filter(|(distance, _)| *distance <= 2)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    pub fn report_error(&self, err: CommandError) {
        output::error(err);
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit the reporting shell?")
            .default(true)
            .interact()
            .map_err(CliError::from)
    }
}

fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "summary",
        "Show totals for the filtered entries",
        "summary",
        cmd_summary,
    ));
    registry.register(CommandEntry::new(
        "list",
        "Show the filtered entries as a table",
        "list",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "chart",
        "Render budget vs spent bars per project",
        "chart",
        cmd_chart,
    ));
    registry.register(CommandEntry::new(
        "add",
        "Add a budget entry",
        "add [year project budget spent returned]",
        cmd_add,
    ));
    registry.register(CommandEntry::new(
        "year",
        "Set the fiscal-year filter",
        "year <value|all>",
        cmd_year,
    ));
    registry.register(CommandEntry::new(
        "project",
        "Set the project filter",
        "project <value|all>",
        cmd_project,
    ));
    registry.register(CommandEntry::new(
        "years",
        "List fiscal years present in the data",
        "years",
        cmd_years,
    ));
    registry.register(CommandEntry::new(
        "projects",
        "List projects present in the data",
        "projects",
        cmd_projects,
    ));
    registry.register(CommandEntry::new(
        "filters",
        "Show the active filter selectors",
        "filters",
        cmd_filters,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List available commands",
        "help",
        cmd_help,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
    registry.register(CommandEntry::new("quit", "Leave the shell", "quit", cmd_exit));
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let filtered = context.filtered();
    let summary = summarize(&filtered);
    output::section("Budget summary");
    let table = Table {
        columns: vec![
            TableColumn::new("", Alignment::Left),
            TableColumn::new("", Alignment::Right),
        ],
        rows: vec![
            vec!["Total budget".to_string(), format_amount(summary.total_budget)],
            vec!["Total spent".to_string(), format_amount(summary.total_spent)],
            vec![
                "Total returned".to_string(),
                format_amount(summary.total_returned),
            ],
            vec![
                "Total remaining".to_string(),
                format_amount(summary.total_remaining),
            ],
        ],
        show_headers: false,
        padding: 1,
    };
    println!("{}", table.render());
    output::info(format!("{} entries in view.", filtered.len()));
    Ok(LoopControl::Continue)
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let filtered = context.filtered();
    if filtered.is_empty() {
        output::info("No entries match the active filters.");
        return Ok(LoopControl::Continue);
    }
    let rows = filtered
        .iter()
        .map(|entry| {
            vec![
                entry.year.clone(),
                entry.project_name.clone(),
                format_amount(entry.budget),
                format_amount(entry.spent),
                format_amount(entry.returned),
                format_amount(entry.remaining),
                format_percentage(entry),
            ]
        })
        .collect();
    let table = Table {
        columns: vec![
            TableColumn::new("Year", Alignment::Left),
            TableColumn::new("Project", Alignment::Left),
            TableColumn::new("Budget", Alignment::Right),
            TableColumn::new("Spent", Alignment::Right),
            TableColumn::new("Returned", Alignment::Right),
            TableColumn::new("Remaining", Alignment::Right),
            TableColumn::new("Spent %", Alignment::Right),
        ],
        rows,
        show_headers: true,
        padding: 1,
    };
    println!("{}", table.render());
    Ok(LoopControl::Continue)
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let filtered = context.filtered();
    if filtered.is_empty() {
        output::info("No entries match the active filters.");
        return Ok(LoopControl::Continue);
    }
    output::section("Budget vs spent");
    for line in render_chart(&filtered) {
        println!("{}", line);
    }
    Ok(LoopControl::Continue)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = match args.len() {
        0 => {
            if context.mode() == CliMode::Script {
                return Err(CommandError::InvalidArguments(
                    "Usage: add <year> <project> <budget> <spent> <returned>".to_string(),
                ));
            }
            forms::add_entry_form(&context.theme)?
        }
        5 => RawEntryInput {
            year: args[0].to_string(),
            project_name: args[1].to_string(),
            budget: args[2].to_string(),
            spent: args[3].to_string(),
            returned: args[4].to_string(),
        },
        _ => {
            return Err(CommandError::InvalidArguments(
                "Usage: add <year> <project> <budget> <spent> <returned>".to_string(),
            ))
        }
    };

    let entry = ingest::build_entry(input);
    let label = if entry.project_name.is_empty() {
        "(unnamed)".to_string()
    } else {
        entry.project_name.clone()
    };
    context.entries = context.store.append(&context.entries, entry)?;
    output::success(format!(
        "Added entry for `{}`. {} entries total.",
        label,
        context.entries.len()
    ));
    Ok(LoopControl::Continue)
}

fn cmd_year(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "Usage: year <value|all>".to_string(),
        ));
    };
    context.year_filter = Selector::parse(raw);
    output::success(format!("Year filter set to `{}`.", context.year_filter));
    Ok(LoopControl::Continue)
}

fn cmd_project(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "Usage: project <value|all>".to_string(),
        ));
    };
    context.project_filter = Selector::parse(raw);
    output::success(format!(
        "Project filter set to `{}`.",
        context.project_filter
    ));
    Ok(LoopControl::Continue)
}

fn cmd_years(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_options("Fiscal years", list_distinct(&context.entries, DistinctField::Year));
    Ok(LoopControl::Continue)
}

fn cmd_projects(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_options(
        "Projects",
        list_distinct(&context.entries, DistinctField::ProjectName),
    );
    Ok(LoopControl::Continue)
}

fn print_options(title: &str, values: Vec<String>) {
    output::section(title);
    println!("  all");
    for value in values {
        println!("  {}", value);
    }
}

fn cmd_filters(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(format!(
        "year = {}, project = {}",
        context.year_filter, context.project_filter
    ));
    Ok(LoopControl::Continue)
}

fn cmd_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Commands");
    for entry in context.registry.list() {
        println!("  {:<10} {:<45} {}", entry.name, entry.description, entry.usage);
    }
    Ok(LoopControl::Continue)
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context_with_temp_store() -> (ShellContext, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = SnapshotStore::new(Some(temp.path().to_path_buf())).expect("snapshot store");
        let context = ShellContext::with_store(CliMode::Script, store);
        (context, temp)
    }

    #[test]
    fn add_appends_and_persists() {
        let (mut context, _guard) = context_with_temp_store();
        context
            .dispatch("add", &["2567", "A", "1000", "400", "100"])
            .expect("add succeeds");
        assert_eq!(context.entries.len(), 1);
        assert_eq!(context.entries[0].remaining, 500.0);
        assert_eq!(context.store.load(), context.entries);
    }

    #[test]
    fn add_coerces_garbage_amounts_to_zero() {
        let (mut context, _guard) = context_with_temp_store();
        context
            .dispatch("add", &["2568", "B", "abc", "50", ""])
            .expect("add succeeds");
        let entry = &context.entries[0];
        assert_eq!(entry.budget, 0.0);
        assert_eq!(entry.spent, 50.0);
        assert_eq!(entry.remaining, -50.0);
        assert!(entry.spent_percentage.is_finite());
    }

    #[test]
    fn selectors_narrow_the_view() {
        let (mut context, _guard) = context_with_temp_store();
        context
            .dispatch("add", &["2567", "A", "100", "0", "0"])
            .unwrap();
        context
            .dispatch("add", &["2568", "B", "200", "0", "0"])
            .unwrap();
        context.dispatch("year", &["2567"]).unwrap();
        assert_eq!(context.filtered().len(), 1);
        context.dispatch("year", &["all"]).unwrap();
        assert_eq!(context.filtered().len(), 2);
    }

    #[test]
    fn unknown_command_suggests_the_closest_name() {
        let (mut context, _guard) = context_with_temp_store();
        let err = context.dispatch("sumary", &[]).unwrap_err();
        assert!(format!("{err}").contains("summary"));
    }

    #[test]
    fn script_mode_add_without_args_is_rejected() {
        let (mut context, _guard) = context_with_temp_store();
        let err = context.dispatch("add", &[]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(_)));
    }

    #[test]
    fn exit_requests_loop_exit() {
        let (mut context, _guard) = context_with_temp_store();
        assert_eq!(context.dispatch("exit", &[]).unwrap(), LoopControl::Exit);
    }

    #[test]
    fn prompt_shows_active_selectors() {
        let (mut context, _guard) = context_with_temp_store();
        context.dispatch("project", &["A"]).unwrap();
        assert_eq!(context.prompt(), "budget-report (all | A)> ");
    }
}
