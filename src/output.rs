//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

use crate::db::{QueryResult, RowData};
use crate::types::{AffectedResult, NamesResult, RowsResult};

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Render records as an aligned text grid.
///
/// Columns are the union of all record keys in first-seen order; a record
/// lacking a column shows an empty cell.
pub fn render_rows(rows: &[RowData]) -> Vec<String> {
    let mut columns: Vec<&str> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.contains(&key) {
                columns.push(key);
            }
        }
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|c| row.get(c).map(ToString::to_string).unwrap_or_default())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|line| line[i].chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let join = |values: Vec<String>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join(columns.iter().map(|c| c.to_string()).collect()));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for line in cells {
        lines.push(join(line));
    }
    lines
}

fn rows_table(title: String, rows: &[RowData]) -> String {
    let mut lines = vec![title, String::new()];
    if rows.is_empty() {
        lines.push("No rows.".to_string());
    } else {
        lines.extend(render_rows(rows));
    }
    lines.join("\n")
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

impl Outputable for RowsResult {
    fn to_table(&self) -> String {
        rows_table(
            format!("{} ({})", self.table, plural(self.rows.len(), "row")),
            &self.rows,
        )
    }
}

impl Outputable for AffectedResult {
    fn to_table(&self) -> String {
        format!(
            "{} {}: {} affected",
            self.operation,
            self.table,
            plural(self.affected as usize, "row")
        )
    }
}

impl Outputable for NamesResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("{} ({})", self.title, self.names.len()), String::new()];
        if self.names.is_empty() {
            lines.push("None found.".to_string());
        }
        for name in &self.names {
            lines.push(format!("  {}", name));
        }
        lines.join("\n")
    }
}

impl Outputable for QueryResult {
    fn to_table(&self) -> String {
        match self {
            QueryResult::Rows(rows) => {
                rows_table(format!("Query ({})", plural(rows.len(), "row")), rows)
            }
            QueryResult::Affected(n) => {
                format!("Query executed: {} affected", plural(*n as usize, "row"))
            }
        }
    }
}
