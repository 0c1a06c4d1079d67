//! Driver abstraction.
//!
//! The facade talks to the database only through these two traits, which
//! mirror the primitives every relational client exposes: connect, execute,
//! commit, rollback and close. `postgres::PostgresConnector` is the
//! production implementation; tests plug in a recording fake.

use super::builder::Dialect;
use super::config::ConnectionConfig;
use super::value::Value;
use super::DbError;

/// Outcome of executing one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Execution {
    /// Rows affected, as reported by the driver. Zero for plain reads.
    pub affected: u64,
    /// Result column names. `Some` whenever the statement produced a row
    /// set, even an empty one; `None` for statements without results.
    pub columns: Option<Vec<String>>,
    /// Result rows, each positionally aligned with `columns`.
    pub rows: Vec<Vec<Value>>,
}

impl Execution {
    /// Result of a statement that returned no row set.
    pub fn affected(affected: u64) -> Self {
        Self {
            affected,
            columns: None,
            rows: Vec::new(),
        }
    }

    /// Result of a statement that returned a row set.
    pub fn rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            affected: 0,
            columns: Some(columns),
            rows,
        }
    }
}

/// Opens physical connections.
///
/// Implementations must be safe to call from several threads at once; the
/// facade calls `connect` once per operation and never shares the result.
pub trait Connector: Send + Sync {
    /// Open a new connection.
    fn connect(&self, config: &ConnectionConfig) -> Result<Box<dyn Connection>, DbError>;

    /// Placeholder and pagination rules this driver expects.
    fn dialect(&self) -> Dialect;

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

/// One live connection.
///
/// Statements run inside an implicit transaction that stays open until
/// `commit` or `rollback`. Closing without committing discards it.
pub trait Connection {
    /// Execute one statement with its bound parameters.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Execution, DbError>;

    fn commit(&mut self) -> Result<(), DbError>;

    fn rollback(&mut self) -> Result<(), DbError>;

    /// Close the connection. Calling it on a closed connection is a no-op.
    fn close(&mut self) -> Result<(), DbError>;

    fn is_open(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_constructors() {
        let write = Execution::affected(3);
        assert_eq!(write.affected, 3);
        assert!(write.columns.is_none());

        let read = Execution::rows(vec!["id".to_string()], vec![]);
        assert_eq!(read.columns, Some(vec!["id".to_string()]));
        assert!(read.rows.is_empty());
    }

    #[test]
    fn test_traits_are_object_safe() {
        // Compile-time check that both traits can be used as trait objects
        fn accepts_connector(_c: &dyn Connector) {}
        fn accepts_connection(_c: &mut dyn Connection) {}
        let _ = accepts_connector;
        let _ = accepts_connection;
    }
}
