mod cli_tests;
mod execute;

use clap::Args;

use crate::cli::{parse_pair, parse_value};
use crate::db::Value;

/// Read every row of a table
#[derive(Args, Debug)]
pub struct SelectAllCmd {
    /// Table to read
    pub table: String,
}

/// Read a window of rows, counted from 1 and inclusive at both ends
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  dbutils select-page users --from 1 --to 10     # first ten rows
  dbutils select-page users --from 11 --to 20    # next ten")]
pub struct SelectPageCmd {
    /// Table to read
    pub table: String,

    /// First row to return (1-based)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub from: u64,

    /// Last row to return (inclusive)
    #[arg(long)]
    pub to: u64,
}

/// Read rows where one column equals a value
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  dbutils select-by users --column email --value a@b.c")]
pub struct SelectByCmd {
    /// Table to read
    pub table: String,

    /// Column to match
    #[arg(short, long)]
    pub column: String,

    /// Value to match (null, true/false and numbers are typed)
    #[arg(short, long, value_parser = parse_value)]
    pub value: Value,
}

/// Read rows matching every filter
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  dbutils select users --where status=active --where role=admin")]
pub struct SelectCmd {
    /// Table to read
    pub table: String,

    /// Filter as column=value (repeatable, AND-combined)
    #[arg(short = 'w', long = "where", value_parser = parse_pair, required = true)]
    pub filters: Vec<(String, Value)>,
}
