//! Command definitions and implementations.
//!
//! Commands are grouped by what they touch. Each group module holds:
//! - The command structs with clap attributes for CLI parsing
//! - `execute.rs` mapping each command onto a `QueryFacade` call
//! - CLI parsing and execution tests

mod query;
mod read;
mod schema;
mod write;

pub use query::QueryCmd;
pub use read::{SelectAllCmd, SelectByCmd, SelectCmd, SelectPageCmd};
pub use schema::{CreateTableCmd, DescribeCmd, DropTableCmd, ListTablesCmd, TruncateCmd};
pub use write::{DeleteCmd, InsertCmd, InsertManyCmd, UpdateCmd};

use clap::Subcommand;
use std::error::Error;

use crate::db::QueryFacade;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, db: &QueryFacade) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a table from column definitions
    CreateTable(CreateTableCmd),

    /// Insert one row
    Insert(InsertCmd),

    /// Insert many rows from a JSON file in one transaction
    InsertMany(InsertManyCmd),

    /// Read every row of a table
    SelectAll(SelectAllCmd),

    /// Read rows FROM..=TO (1-based)
    SelectPage(SelectPageCmd),

    /// Read rows where a column equals a value
    SelectBy(SelectByCmd),

    /// Read rows matching every filter
    Select(SelectCmd),

    /// Update rows matching every filter
    Update(UpdateCmd),

    /// Delete rows matching every filter
    Delete(DeleteCmd),

    /// Remove every row from a table
    Truncate(TruncateCmd),

    /// Drop a table
    DropTable(DropTableCmd),

    /// Run a SQL statement verbatim
    Query(QueryCmd),

    /// List tables
    ListTables(ListTablesCmd),

    /// Show a table's column names
    Describe(DescribeCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

fn render<C: Execute>(cmd: C, db: &QueryFacade, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let result = cmd.execute(db)?;
    Ok(result.format(format))
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, db: &QueryFacade, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::CreateTable(cmd) => render(cmd, db, format),
            Command::Insert(cmd) => render(cmd, db, format),
            Command::InsertMany(cmd) => render(cmd, db, format),
            Command::SelectAll(cmd) => render(cmd, db, format),
            Command::SelectPage(cmd) => render(cmd, db, format),
            Command::SelectBy(cmd) => render(cmd, db, format),
            Command::Select(cmd) => render(cmd, db, format),
            Command::Update(cmd) => render(cmd, db, format),
            Command::Delete(cmd) => render(cmd, db, format),
            Command::Truncate(cmd) => render(cmd, db, format),
            Command::DropTable(cmd) => render(cmd, db, format),
            Command::Query(cmd) => render(cmd, db, format),
            Command::ListTables(cmd) => render(cmd, db, format),
            Command::Describe(cmd) => render(cmd, db, format),
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}
