mod execute;

use clap::Args;

/// Create a table from column definitions
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  dbutils create-table users 'id INT PRIMARY KEY' 'name VARCHAR(64)'")]
pub struct CreateTableCmd {
    /// Table to create
    pub table: String,

    /// Column definitions, each a name followed by its type
    #[arg(required = true)]
    pub columns: Vec<String>,
}

/// Drop a table
#[derive(Args, Debug)]
pub struct DropTableCmd {
    /// Table to drop
    pub table: String,
}

/// Remove every row from a table
#[derive(Args, Debug)]
pub struct TruncateCmd {
    /// Table to empty
    pub table: String,
}

/// List the tables of the connected database
#[derive(Args, Debug)]
pub struct ListTablesCmd {}

/// Show the column names of a table, in declared order
#[derive(Args, Debug)]
pub struct DescribeCmd {
    /// Table to describe
    pub table: String,
}
