//! PostgreSQL backend implementation.
//!
//! Uses the synchronous `postgres` crate. Each connection behaves like a
//! client with autocommit disabled: the first statement opens a transaction
//! that stays open until `commit` or `rollback`, and closing the connection
//! without committing discards it.

mod conversion;

use std::error::Error as _;

use postgres::types::ToSql;
use postgres::{Client, NoTls};

use super::backend::{Connection, Connector, Execution};
use super::builder::Dialect;
use super::config::ConnectionConfig;
use super::value::Value;
use super::DbError;

pub use conversion::row_values;

/// Opens plain TCP connections to PostgreSQL.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresConnector;

impl PostgresConnector {
    /// Translate the config into driver options.
    pub fn client_config(config: &ConnectionConfig) -> postgres::Config {
        let mut pg = postgres::Config::new();
        pg.host(&config.host)
            .port(config.port)
            .dbname(&config.database)
            .user(&config.username);
        if let Some(password) = &config.password {
            pg.password(password);
        }
        pg
    }
}

impl Connector for PostgresConnector {
    fn connect(&self, config: &ConnectionConfig) -> Result<Box<dyn Connection>, DbError> {
        let client = Self::client_config(config)
            .connect(NoTls)
            .map_err(|e| DbError::Connection {
                message: format!(
                    "{}@{}:{}/{}: {}",
                    config.username,
                    config.host,
                    config.port,
                    config.database,
                    describe(&e)
                ),
            })?;
        Ok(Box::new(PostgresConnection {
            client: Some(client),
            in_transaction: false,
        }))
    }

    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn backend_name(&self) -> &'static str {
        "Postgres"
    }
}

/// A live PostgreSQL session.
pub struct PostgresConnection {
    client: Option<Client>,
    in_transaction: bool,
}

/// Render a server-reported error as `message [SQLSTATE]: detail`.
fn server_message(message: &str, code: &str, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("{} [{}]: {}", message, code, detail),
        None => format!("{} [{}]", message, code),
    }
}

/// Full text of a driver error.
///
/// The driver's own `Display` stops at its error kind ("db error"), so the
/// server's message or the underlying cause is appended here.
fn describe(e: &postgres::Error) -> String {
    if let Some(db) = e.as_db_error() {
        return server_message(db.message(), db.code().code(), db.detail());
    }
    match e.source() {
        Some(source) => format!("{}: {}", e, source),
        None => e.to_string(),
    }
}

fn execution_error(e: postgres::Error) -> DbError {
    DbError::Execution {
        message: describe(&e),
    }
}

fn closed() -> DbError {
    DbError::Connection {
        message: "connection is closed".to_string(),
    }
}

impl PostgresConnection {
    fn client(&mut self) -> Result<&mut Client, DbError> {
        self.client.as_mut().ok_or_else(closed)
    }

    fn begin_if_needed(&mut self) -> Result<(), DbError> {
        if !self.in_transaction {
            self.client()?.batch_execute("BEGIN").map_err(execution_error)?;
            self.in_transaction = true;
        }
        Ok(())
    }

    fn finish(&mut self, command: &str) -> Result<(), DbError> {
        if !self.in_transaction {
            return Ok(());
        }
        // The transaction is over either way once the command was sent.
        self.in_transaction = false;
        self.client()?
            .batch_execute(command)
            .map_err(|e| DbError::Execution {
                message: format!("{} failed: {}", command, describe(&e)),
            })
    }
}

impl Connection for PostgresConnection {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Execution, DbError> {
        self.begin_if_needed()?;
        let client = self.client()?;
        let statement = client.prepare(sql).map_err(execution_error)?;
        let bound: Vec<&(dyn ToSql + Sync)> =
            params.iter().map(|v| v as &(dyn ToSql + Sync)).collect();

        // Statements that describe result columns are read with `query`,
        // everything else with `execute`.
        if statement.columns().is_empty() {
            let affected = client.execute(&statement, &bound).map_err(execution_error)?;
            return Ok(Execution::affected(affected));
        }

        let columns: Vec<String> = statement
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let rows = client.query(&statement, &bound).map_err(execution_error)?;
        let affected = rows.len() as u64;
        let values = rows
            .iter()
            .map(row_values)
            .collect::<Result<Vec<_>, _>>()
            .map_err(execution_error)?;
        Ok(Execution {
            affected,
            columns: Some(columns),
            rows: values,
        })
    }

    fn commit(&mut self) -> Result<(), DbError> {
        self.finish("COMMIT")
    }

    fn rollback(&mut self) -> Result<(), DbError> {
        self.finish("ROLLBACK")
    }

    fn close(&mut self) -> Result<(), DbError> {
        self.in_transaction = false;
        match self.client.take() {
            Some(client) => client.close().map_err(|e| DbError::Connection {
                message: format!("close failed: {}", describe(&e)),
            }),
            None => Ok(()),
        }
    }

    fn is_open(&self) -> bool {
        self.client.as_ref().is_some_and(|c| !c.is_closed())
    }
}
