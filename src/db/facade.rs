//! The query facade: one transactional call per operation.
//!
//! Each public method follows the same sequence:
//! 1. Build the statement plan (validation errors surface before connecting)
//! 2. Acquire a connection scope
//! 3. Execute; mutations commit on success and roll back on any failure
//! 4. Release the connection (scope drop)
//! 5. Map rows for reads
//!
//! No connection outlives a call and no state is shared between calls, so a
//! facade can be used from many threads at once.

use serde::Serialize;
use tracing::{debug, info, warn};

use super::backend::{Connection, Connector, Execution};
use super::builder::{StatementBuilder, StatementPlan};
use super::config::ConnectionConfig;
use super::connection::ConnectionScope;
use super::mapper::map_rows;
use super::postgres::PostgresConnector;
use super::row::{FilterSet, RowData};
use super::value::Value;
use super::DbError;

/// Rows per statement when inserting many rows.
pub const INSERT_CHUNK_SIZE: usize = 500;

/// What a raw query produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryResult {
    /// The statement returned a row set.
    Rows(Vec<RowData>),
    /// The statement returned no row set; number of rows affected.
    Affected(u64),
}

/// CRUD operations over one database, one connection per call.
pub struct QueryFacade {
    connector: Box<dyn Connector>,
    config: ConnectionConfig,
    builder: StatementBuilder,
}

impl QueryFacade {
    /// Create a facade whose statements follow the connector's dialect.
    pub fn new(connector: Box<dyn Connector>, config: ConnectionConfig) -> Self {
        let builder = StatementBuilder::new(connector.dialect());
        Self {
            connector,
            config,
            builder,
        }
    }

    /// Facade over PostgreSQL.
    pub fn postgres(config: ConnectionConfig) -> Self {
        Self::new(Box::new(PostgresConnector), config)
    }

    pub fn builder(&self) -> &StatementBuilder {
        &self.builder
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn create_table<S: AsRef<str>>(&self, table: &str, columns: &[S]) -> Result<u64, DbError> {
        let plan = self.builder.create_table(table, columns)?;
        self.mutate("create_table", table, &[plan])
    }

    pub fn insert(&self, table: &str, row: &RowData) -> Result<u64, DbError> {
        let plan = self.builder.insert(table, row)?;
        self.mutate("insert", table, &[plan])
    }

    /// Insert rows using the table's own column list, discovered on the
    /// same connection. Columns missing from a row are inserted as `NULL`.
    pub fn insert_many(&self, table: &str, rows: &[RowData]) -> Result<u64, DbError> {
        if rows.is_empty() {
            return Err(DbError::empty("insert many requires at least one row"));
        }
        let describe = self.builder.describe_columns(table)?;
        let mut scope = self.acquire()?;
        let affected = in_transaction(scope.connection(), |conn| {
            let columns = first_column_strings(run(conn, &describe)?);
            if columns.is_empty() {
                return Err(DbError::empty(format!(
                    "table '{}' has no columns or does not exist",
                    table
                )));
            }
            let plans = self.chunk_plans(table, &columns, rows)?;
            run_all(conn, &plans)
        })?;
        info!(operation = "insert_many", table, affected, "committed");
        Ok(affected)
    }

    /// Insert rows over an explicit column list. Columns missing from a
    /// row are inserted as `NULL`.
    pub fn insert_many_with_columns<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
        rows: &[RowData],
    ) -> Result<u64, DbError> {
        let plans = self.chunk_plans(table, columns, rows)?;
        self.mutate("insert_many", table, &plans)
    }

    pub fn select_all(&self, table: &str) -> Result<Vec<RowData>, DbError> {
        let plan = self.builder.select_all(table)?;
        self.read(&plan)
    }

    /// Rows `from..=to`, counted from 1.
    pub fn select_paginated(&self, table: &str, from: u64, to: u64) -> Result<Vec<RowData>, DbError> {
        let plan = self.builder.select_paginated(table, from, to)?;
        self.read(&plan)
    }

    pub fn select_by_column(
        &self,
        table: &str,
        column: &str,
        value: impl Into<Value>,
    ) -> Result<Vec<RowData>, DbError> {
        let plan = self.builder.select_by_column(table, column, value.into())?;
        self.read(&plan)
    }

    pub fn select_filtered(&self, table: &str, filters: &FilterSet) -> Result<Vec<RowData>, DbError> {
        let plan = self.builder.select_filtered(table, filters)?;
        self.read(&plan)
    }

    pub fn update(
        &self,
        table: &str,
        assignments: &RowData,
        filters: &FilterSet,
    ) -> Result<u64, DbError> {
        let plan = self.builder.update(table, assignments, filters)?;
        self.mutate("update", table, &[plan])
    }

    /// Delete matching rows. Refuses an empty filter set; see `truncate`.
    pub fn delete(&self, table: &str, filters: &FilterSet) -> Result<u64, DbError> {
        let plan = self.builder.delete(table, filters)?;
        self.mutate("delete", table, &[plan])
    }

    /// Remove every row.
    pub fn truncate(&self, table: &str) -> Result<u64, DbError> {
        let plan = self.builder.truncate(table)?;
        self.mutate("truncate", table, &[plan])
    }

    pub fn drop_table(&self, table: &str) -> Result<u64, DbError> {
        let plan = self.builder.drop_table(table)?;
        self.mutate("drop_table", table, &[plan])
    }

    /// Run arbitrary SQL.
    ///
    /// The result kind is decided from what the driver reports after
    /// execution: a row set yields `Rows`, anything else `Affected`. The
    /// statement always commits on success, since statements such as
    /// `INSERT ... RETURNING` both return rows and write.
    pub fn raw_query(&self, sql: &str) -> Result<QueryResult, DbError> {
        let plan = self.builder.raw(sql)?;
        let mut scope = self.acquire()?;
        let execution = in_transaction(scope.connection(), |conn| run(conn, &plan))?;
        drop(scope);

        Ok(match execution.columns {
            Some(columns) => QueryResult::Rows(map_rows(&columns, execution.rows)),
            None => {
                info!(operation = "raw_query", affected = execution.affected, "committed");
                QueryResult::Affected(execution.affected)
            }
        })
    }

    /// Names of the tables in the current schema.
    pub fn list_tables(&self) -> Result<Vec<String>, DbError> {
        let plan = self.builder.list_tables();
        let mut scope = self.acquire()?;
        let execution = run(scope.connection(), &plan)?;
        Ok(first_column_strings(execution))
    }

    /// Column names of `table`, in declared order.
    pub fn describe_columns(&self, table: &str) -> Result<Vec<String>, DbError> {
        let plan = self.builder.describe_columns(table)?;
        let mut scope = self.acquire()?;
        let execution = run(scope.connection(), &plan)?;
        Ok(first_column_strings(execution))
    }

    fn acquire(&self) -> Result<ConnectionScope, DbError> {
        ConnectionScope::acquire(self.connector.as_ref(), &self.config)
    }

    fn read(&self, plan: &StatementPlan) -> Result<Vec<RowData>, DbError> {
        let mut scope = self.acquire()?;
        let execution = run(scope.connection(), plan)?;
        drop(scope);
        let columns = execution.columns.unwrap_or_default();
        Ok(map_rows(&columns, execution.rows))
    }

    fn mutate(&self, operation: &str, table: &str, plans: &[StatementPlan]) -> Result<u64, DbError> {
        let mut scope = self.acquire()?;
        let affected = in_transaction(scope.connection(), |conn| run_all(conn, plans))?;
        info!(operation, table, affected, "committed");
        Ok(affected)
    }

    fn chunk_plans<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
        rows: &[RowData],
    ) -> Result<Vec<StatementPlan>, DbError> {
        if rows.is_empty() {
            return Err(DbError::empty("insert many requires at least one row"));
        }
        rows.chunks(INSERT_CHUNK_SIZE)
            .map(|chunk| self.builder.insert_many(table, columns, chunk))
            .collect()
    }
}

/// Run `work`, then commit. Any failure, including a failed commit, rolls
/// back exactly once. If the rollback fails too, both errors are returned.
fn in_transaction<T>(
    conn: &mut dyn Connection,
    work: impl FnOnce(&mut dyn Connection) -> Result<T, DbError>,
) -> Result<T, DbError> {
    let outcome = work(&mut *conn).and_then(|value| conn.commit().map(|()| value));
    match outcome {
        Ok(value) => Ok(value),
        Err(cause) => {
            warn!(error = %cause, "rolling back");
            match conn.rollback() {
                Ok(()) => Err(cause),
                Err(rollback) => Err(DbError::RollbackFailed {
                    cause: Box::new(cause),
                    rollback: Box::new(rollback),
                }),
            }
        }
    }
}

fn run(conn: &mut dyn Connection, plan: &StatementPlan) -> Result<Execution, DbError> {
    debug!(sql = %plan.sql, params = plan.params.len(), "executing");
    conn.execute(&plan.sql, &plan.params)
}

fn run_all(conn: &mut dyn Connection, plans: &[StatementPlan]) -> Result<u64, DbError> {
    let mut affected = 0;
    for plan in plans {
        affected += run(conn, plan)?.affected;
    }
    Ok(affected)
}

/// First cell of every row, as text.
fn first_column_strings(execution: Execution) -> Vec<String> {
    execution
        .rows
        .into_iter()
        .filter_map(|row| row.into_iter().next())
        .map(|value| match value {
            Value::Text(s) => s,
            other => other.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Dialect;
    use crate::test_utils::{FakeConnector, Script};
    use rstest::rstest;
    use std::sync::Arc;

    fn facade(script: Script) -> (QueryFacade, FakeConnector) {
        let connector = FakeConnector::new(script);
        let facade = QueryFacade::new(Box::new(connector.clone()), FakeConnector::config());
        (facade, connector)
    }

    fn postgres_facade(script: Script) -> (QueryFacade, FakeConnector) {
        let connector = FakeConnector::new(script).with_dialect(Dialect::Postgres);
        let facade = QueryFacade::new(Box::new(connector.clone()), FakeConnector::config());
        (facade, connector)
    }

    fn users_rows() -> Execution {
        Execution::rows(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec![Value::Int(1), Value::from("x")],
                vec![Value::Int(2), Value::from("y")],
            ],
        )
    }

    #[test]
    fn test_insert_commits_and_returns_affected() {
        let (facade, connector) = facade(Script::default());
        let row = RowData::new().with("name", "alice").with("age", 30);
        let affected = facade.insert("users", &row).unwrap();

        assert_eq!(affected, 1);
        let stats = connector.stats();
        assert_eq!(stats.commits, 1);
        assert_eq!(stats.rollbacks, 0);
        assert_eq!(stats.acquired, 1);
        assert_eq!(stats.closed, 1);
        assert_eq!(
            stats.executed,
            vec![(
                "INSERT INTO users (name, age) VALUES (?, ?)".to_string(),
                vec![Value::from("alice"), Value::Int(30)],
            )]
        );
    }

    #[test]
    fn test_update_failure_rolls_back_once() {
        let (facade, connector) = facade(Script {
            fail_execute_at: Some(0),
            ..Script::default()
        });
        let result = facade.update(
            "users",
            &RowData::new().with("name", "bob"),
            &FilterSet::new().with("id", 1),
        );

        assert!(matches!(result, Err(DbError::Execution { .. })));
        let stats = connector.stats();
        assert_eq!(stats.rollbacks, 1);
        assert_eq!(stats.commits, 0);
        assert_eq!(stats.closed, 1);
    }

    #[test]
    fn test_commit_failure_rolls_back() {
        let (facade, connector) = facade(Script {
            fail_commit: true,
            ..Script::default()
        });
        let result = facade.truncate("logs");

        assert!(matches!(result, Err(DbError::Execution { .. })));
        assert_eq!(connector.stats().rollbacks, 1);
        assert_eq!(connector.stats().closed, 1);
    }

    #[test]
    fn test_rollback_failure_reports_both_errors() {
        let (facade, connector) = facade(Script {
            fail_execute_at: Some(0),
            fail_rollback: true,
            ..Script::default()
        });
        let err = facade
            .delete("users", &FilterSet::new().with("id", 1))
            .unwrap_err();

        match err {
            DbError::RollbackFailed { cause, rollback } => {
                assert!(matches!(*cause, DbError::Execution { .. }));
                assert!(matches!(*rollback, DbError::Connection { .. }));
            }
            other => panic!("Expected RollbackFailed, got {:?}", other),
        }
        assert_eq!(connector.stats().closed, 1);
    }

    #[test]
    fn test_delete_without_filters_never_connects() {
        let (facade, connector) = facade(Script::default());
        let err = facade.delete("users", &FilterSet::new()).unwrap_err();

        assert!(matches!(err, DbError::UnsafeOperation { .. }));
        assert_eq!(connector.stats().acquired, 0);
        assert!(connector.stats().executed.is_empty());
    }

    #[test]
    fn test_connect_failure_surfaces_connection_error() {
        let (facade, connector) = facade(Script {
            fail_connect: true,
            ..Script::default()
        });
        let err = facade.select_all("users").unwrap_err();

        assert!(matches!(err, DbError::Connection { .. }));
        assert_eq!(connector.stats().closed, 0);
    }

    #[test]
    fn test_select_all_maps_rows() {
        let (facade, connector) = facade(Script {
            responses: vec![users_rows()],
            ..Script::default()
        });
        let rows = facade.select_all("users").unwrap();

        assert_eq!(
            rows,
            vec![
                RowData::new().with("id", 1).with("name", "x"),
                RowData::new().with("id", 2).with("name", "y"),
            ]
        );
        let stats = connector.stats();
        assert_eq!(stats.commits, 0);
        assert_eq!(stats.closed, 1);
    }

    #[test]
    fn test_read_failure_returns_no_rows() {
        let (facade, connector) = facade(Script {
            fail_execute_at: Some(0),
            ..Script::default()
        });
        let result = facade.select_filtered("users", &FilterSet::new().with("id", 1));

        assert!(matches!(result, Err(DbError::Execution { .. })));
        assert_eq!(connector.stats().closed, 1);
    }

    #[test]
    fn test_select_paginated_uses_limit() {
        let (facade, connector) = facade(Script {
            responses: vec![Execution::rows(vec!["id".to_string()], vec![])],
            ..Script::default()
        });
        facade.select_paginated("users", 11, 20).unwrap();
        assert_eq!(connector.stats().executed[0].0, "SELECT * FROM users LIMIT 10, 10");
    }

    #[test]
    fn test_select_paginated_invalid_range_never_connects() {
        let (facade, connector) = facade(Script::default());
        let err = facade.select_paginated("users", 5, 3).unwrap_err();
        assert!(matches!(err, DbError::InvalidRange { .. }));
        assert_eq!(connector.stats().acquired, 0);
    }

    #[test]
    fn test_select_by_column_binds_value() {
        let (facade, connector) = facade(Script {
            responses: vec![users_rows()],
            ..Script::default()
        });
        facade.select_by_column("users", "name", "x").unwrap();
        assert_eq!(
            connector.stats().executed[0],
            (
                "SELECT * FROM users WHERE name = ?".to_string(),
                vec![Value::from("x")]
            )
        );
    }

    #[test]
    fn test_raw_query_with_columns_returns_rows() {
        let (facade, connector) = facade(Script {
            responses: vec![users_rows()],
            ..Script::default()
        });
        let result = facade.raw_query("WITH u AS (SELECT * FROM users) SELECT * FROM u").unwrap();

        match result {
            QueryResult::Rows(rows) => assert_eq!(rows.len(), 2),
            other => panic!("Expected rows, got {:?}", other),
        }
        assert_eq!(connector.stats().commits, 1);
    }

    #[test]
    fn test_raw_query_without_columns_returns_affected() {
        let (facade, _connector) = facade(Script {
            responses: vec![Execution::affected(4)],
            ..Script::default()
        });
        let result = facade.raw_query("SELECT-looking text is not inspected").unwrap();
        assert_eq!(result, QueryResult::Affected(4));
    }

    #[test]
    fn test_raw_query_empty_row_set_is_rows() {
        let (facade, _connector) = facade(Script {
            responses: vec![Execution::rows(vec!["id".to_string()], vec![])],
            ..Script::default()
        });
        assert_eq!(facade.raw_query("CALL p()").unwrap(), QueryResult::Rows(vec![]));
    }

    #[test]
    fn test_insert_many_discovers_columns_on_same_connection() {
        let describe = Execution::rows(
            vec!["Field".to_string(), "Type".to_string()],
            vec![
                vec![Value::from("a"), Value::from("int")],
                vec![Value::from("b"), Value::from("int")],
                vec![Value::from("c"), Value::from("text")],
            ],
        );
        let (facade, connector) = facade(Script {
            responses: vec![describe, Execution::affected(1)],
            ..Script::default()
        });
        let rows = vec![RowData::new().with("a", 1).with("b", 2)];
        let affected = facade.insert_many("t", &rows).unwrap();

        assert_eq!(affected, 1);
        let stats = connector.stats();
        assert_eq!(stats.acquired, 1);
        assert_eq!(stats.executed[0].0, "SHOW COLUMNS FROM t");
        assert_eq!(
            stats.executed[1],
            (
                "INSERT INTO t (a, b, c) VALUES (?, ?, ?)".to_string(),
                vec![Value::Int(1), Value::Int(2), Value::Null]
            )
        );
        assert_eq!(stats.commits, 1);
    }

    #[test]
    fn test_insert_many_unknown_table() {
        let (facade, connector) = facade(Script {
            responses: vec![Execution::rows(vec!["Field".to_string()], vec![])],
            ..Script::default()
        });
        let err = facade
            .insert_many("missing", &[RowData::new().with("a", 1)])
            .unwrap_err();

        assert!(matches!(err, DbError::EmptyInput { .. }));
        assert_eq!(connector.stats().rollbacks, 1);
        assert_eq!(connector.stats().closed, 1);
    }

    #[test]
    fn test_insert_many_chunks_in_one_transaction() {
        let rows: Vec<RowData> = (0..(INSERT_CHUNK_SIZE + 2))
            .map(|i| RowData::new().with("id", i as i64))
            .collect();
        let (facade, connector) = facade(Script {
            responses: vec![
                Execution::affected(INSERT_CHUNK_SIZE as u64),
                Execution::affected(2),
            ],
            ..Script::default()
        });
        let affected = facade.insert_many_with_columns("t", &["id"], &rows).unwrap();

        assert_eq!(affected, (INSERT_CHUNK_SIZE + 2) as u64);
        let stats = connector.stats();
        assert_eq!(stats.executed.len(), 2);
        assert_eq!(stats.executed[0].1.len(), INSERT_CHUNK_SIZE);
        assert_eq!(stats.executed[1].1.len(), 2);
        assert_eq!(stats.commits, 1);
    }

    #[test]
    fn test_insert_many_second_chunk_failure_rolls_back_all() {
        let rows: Vec<RowData> = (0..(INSERT_CHUNK_SIZE + 1))
            .map(|i| RowData::new().with("id", i as i64))
            .collect();
        let (facade, connector) = facade(Script {
            fail_execute_at: Some(1),
            ..Script::default()
        });
        let result = facade.insert_many_with_columns("t", &["id"], &rows);

        assert!(result.is_err());
        let stats = connector.stats();
        assert_eq!(stats.commits, 0);
        assert_eq!(stats.rollbacks, 1);
    }

    #[test]
    fn test_list_tables_and_describe() {
        let (facade, _connector) = facade(Script {
            responses: vec![
                Execution::rows(
                    vec!["Tables_in_app".to_string()],
                    vec![vec![Value::from("orders")], vec![Value::from("users")]],
                ),
                Execution::rows(
                    vec!["Field".to_string()],
                    vec![vec![Value::from("id")], vec![Value::from("name")]],
                ),
            ],
            ..Script::default()
        });
        assert_eq!(facade.list_tables().unwrap(), vec!["orders", "users"]);
        assert_eq!(facade.describe_columns("users").unwrap(), vec!["id", "name"]);
    }

    #[test]
    fn test_postgres_update_numbers_assignments_then_filters() {
        let (facade, connector) = postgres_facade(Script::default());
        facade
            .update(
                "users",
                &RowData::new().with("name", "bob"),
                &FilterSet::new().with("id", 7).with("active", true),
            )
            .unwrap();

        assert_eq!(
            connector.stats().executed,
            vec![(
                "UPDATE users SET name = $1 WHERE id = $2 AND active = $3".to_string(),
                vec![Value::from("bob"), Value::Int(7), Value::Bool(true)],
            )]
        );
    }

    #[test]
    fn test_postgres_delete_numbers_filters() {
        let (facade, connector) = postgres_facade(Script::default());
        facade
            .delete("users", &FilterSet::new().with("id", 7).with("owner", "ann"))
            .unwrap();

        assert_eq!(
            connector.stats().executed[0],
            (
                "DELETE FROM users WHERE id = $1 AND owner = $2".to_string(),
                vec![Value::Int(7), Value::from("ann")],
            )
        );
    }

    #[test]
    fn test_postgres_insert_many_binds_table_then_restarts_numbering_per_chunk() {
        let describe = Execution::rows(
            vec!["column_name".to_string()],
            vec![vec![Value::from("a")], vec![Value::from("b")]],
        );
        let rows: Vec<RowData> = (0..(INSERT_CHUNK_SIZE + 1))
            .map(|i| RowData::new().with("a", i as i64).with("b", "x"))
            .collect();
        let (facade, connector) = postgres_facade(Script {
            responses: vec![
                describe,
                Execution::affected(INSERT_CHUNK_SIZE as u64),
                Execution::affected(1),
            ],
            ..Script::default()
        });
        let affected = facade.insert_many("t", &rows).unwrap();

        assert_eq!(affected, (INSERT_CHUNK_SIZE + 1) as u64);
        let stats = connector.stats();
        assert_eq!(stats.acquired, 1);
        assert_eq!(stats.executed.len(), 3);

        let (catalogue_sql, catalogue_params) = &stats.executed[0];
        assert!(catalogue_sql.contains("information_schema.columns"));
        assert!(catalogue_sql.contains("table_name::text = $1"));
        assert_eq!(catalogue_params, &vec![Value::from("t")]);

        let (first_sql, first_params) = &stats.executed[1];
        assert!(first_sql.starts_with("INSERT INTO t (a, b) VALUES ($1, $2), ($3, $4)"));
        let last = INSERT_CHUNK_SIZE * 2;
        assert!(first_sql.ends_with(&format!("(${}, ${})", last - 1, last)));
        assert_eq!(first_params.len(), INSERT_CHUNK_SIZE * 2);

        assert_eq!(
            stats.executed[2],
            (
                "INSERT INTO t (a, b) VALUES ($1, $2)".to_string(),
                vec![Value::Int(INSERT_CHUNK_SIZE as i64), Value::from("x")],
            )
        );
        assert_eq!(stats.commits, 1);
    }

    #[rstest]
    #[case::create("create_table")]
    #[case::insert("insert")]
    #[case::update("update")]
    #[case::select("select")]
    #[case::raw("raw")]
    fn test_release_exactly_once_on_failure(#[case] operation: &str) {
        let (facade, connector) = facade(Script {
            fail_execute_at: Some(0),
            ..Script::default()
        });
        let failed = match operation {
            "create_table" => facade.create_table("t", &["id INT"]).is_err(),
            "insert" => facade.insert("t", &RowData::new().with("a", 1)).is_err(),
            "update" => facade
                .update("t", &RowData::new().with("a", 1), &FilterSet::new().with("b", 2))
                .is_err(),
            "select" => facade.select_all("t").is_err(),
            "raw" => facade.raw_query("DELETE FROM t").is_err(),
            _ => unreachable!(),
        };
        assert!(failed);
        let stats = connector.stats();
        assert_eq!(stats.acquired, 1);
        assert_eq!(stats.closed, 1);
    }

    #[test]
    fn test_concurrent_calls_each_get_their_own_connection() {
        let (facade, connector) = facade(Script::default());
        let facade = Arc::new(facade);
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let facade = Arc::clone(&facade);
                std::thread::spawn(move || {
                    facade
                        .insert("t", &RowData::new().with("id", i as i64))
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
        let stats = connector.stats();
        assert_eq!(stats.acquired, 8);
        assert_eq!(stats.closed, 8);
        assert_eq!(stats.commits, 8);
    }

    #[test]
    fn test_query_result_serializes() {
        let json = serde_json::to_string(&QueryResult::Affected(3)).unwrap();
        assert_eq!(json, r#"{"affected":3}"#);
    }
}
