mod execute;

use clap::Args;
use std::path::PathBuf;

use crate::cli::parse_pair;
use crate::db::Value;

/// Insert one row
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  dbutils insert users --set name=alice --set age=30
  dbutils insert users --set code=\"'007'\"     # quote to keep a number as text")]
pub struct InsertCmd {
    /// Table to insert into
    pub table: String,

    /// Column value as column=value (repeatable, kept in order)
    #[arg(short = 's', long = "set", value_parser = parse_pair, required = true)]
    pub values: Vec<(String, Value)>,
}

/// Insert many rows from a JSON array of objects
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  dbutils insert-many users --file users.json
  dbutils insert-many users --file users.json --columns id,name,email

Without --columns the table's own column list is read first. Columns a
record does not mention are inserted as NULL.")]
pub struct InsertManyCmd {
    /// Table to insert into
    pub table: String,

    /// JSON file holding an array of objects
    #[arg(long)]
    pub file: PathBuf,

    /// Column list to insert (comma-separated); defaults to the table's columns
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
}

/// Update rows matching every filter
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  dbutils update users --set name=bob --where id=1")]
pub struct UpdateCmd {
    /// Table to update
    pub table: String,

    /// New value as column=value (repeatable)
    #[arg(short = 's', long = "set", value_parser = parse_pair, required = true)]
    pub values: Vec<(String, Value)>,

    /// Filter as column=value (repeatable, AND-combined)
    #[arg(short = 'w', long = "where", value_parser = parse_pair, required = true)]
    pub filters: Vec<(String, Value)>,
}

/// Delete rows matching every filter
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  dbutils delete users --where id=1

Use `truncate` to remove every row.")]
pub struct DeleteCmd {
    /// Table to delete from
    pub table: String,

    /// Filter as column=value (repeatable, AND-combined)
    #[arg(short = 'w', long = "where", value_parser = parse_pair, required = true)]
    pub filters: Vec<(String, Value)>,
}
