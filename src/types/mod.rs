//! Result types shared by the commands.

use serde::Serialize;

use crate::db::RowData;

/// Records read from a table.
#[derive(Debug, Clone, Serialize)]
pub struct RowsResult {
    pub table: String,
    pub rows: Vec<RowData>,
}

/// Outcome of a write: which operation ran against which table, and how
/// many rows the server reported.
#[derive(Debug, Clone, Serialize)]
pub struct AffectedResult {
    pub operation: String,
    pub table: String,
    pub affected: u64,
}

impl AffectedResult {
    pub fn new(operation: &str, table: &str, affected: u64) -> Self {
        Self {
            operation: operation.to_string(),
            table: table.to_string(),
            affected,
        }
    }
}

/// A titled list of names (tables, columns).
#[derive(Debug, Clone, Serialize)]
pub struct NamesResult {
    pub title: String,
    pub names: Vec<String>,
}
