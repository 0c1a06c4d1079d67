mod execute;

use clap::Args;

/// Run a SQL statement as-is and commit
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  dbutils query 'SELECT COUNT(*) AS n FROM users'
  dbutils query \"UPDATE users SET active = false WHERE last_seen < '2020-01-01'\"

The SQL text is sent verbatim with no bound parameters.")]
pub struct QueryCmd {
    /// SQL statement
    pub sql: String,
}
