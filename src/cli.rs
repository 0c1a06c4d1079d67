//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared argument
//! parsers. Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::db::{RowData, Value};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a JSON config file (defaults to ./.dbutils.json, then the environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Parse a `column=value` argument.
///
/// The value is read with `Value::parse_literal`; only the first `=`
/// separates, so values may contain `=` themselves.
pub fn parse_pair(raw: &str) -> Result<(String, Value), String> {
    let (column, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected column=value, got '{}'", raw))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(format!("missing column name in '{}'", raw));
    }
    Ok((column.to_string(), Value::parse_literal(value)))
}

/// Parse a bare value argument.
pub fn parse_value(raw: &str) -> Result<Value, String> {
    Ok(Value::parse_literal(raw))
}

/// Collect parsed pairs into a record, keeping argument order.
pub fn pairs_to_row(pairs: Vec<(String, Value)>) -> RowData {
    pairs.into_iter().collect()
}
