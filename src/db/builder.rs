//! Statement building.
//!
//! Every operation produces a `StatementPlan`: SQL text with positional
//! placeholders plus the values to bind, in placeholder order. Values never
//! appear in the SQL text. Table and column names do, because SQL grammar
//! does not allow identifiers as parameters.
//!
//! # Identifier safety
//!
//! Identifiers are interpolated verbatim and are therefore far less safe
//! than bound values. Callers must only pass identifiers composed by trusted
//! code, never attacker-controlled text. The builder performs a minimal
//! syntactic check (non-empty, no `;`, no NUL) and nothing more.

use super::row::{FilterSet, RowData};
use super::value::Value;
use super::DbError;

/// Placeholder and pagination rules of the target driver.
///
/// `MySql` renders statements for `?`-style drivers and is the builder's
/// default. No MySQL connector ships with this crate: the only production
/// driver is `postgres::PostgresConnector`, which uses `Postgres`. MySQL
/// rendering is exercised against the recording test driver only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dialect {
    /// `?` placeholders, `LIMIT offset, count`.
    #[default]
    MySql,
    /// `$1, $2, ...` placeholders, `LIMIT count OFFSET offset`.
    Postgres,
}

impl Dialect {
    /// Render the placeholder for the 1-based parameter `position`.
    fn placeholder(self, position: usize) -> String {
        match self {
            Dialect::MySql => "?".to_string(),
            Dialect::Postgres => format!("${}", position),
        }
    }

    fn limit_clause(self, offset: u64, count: u64) -> String {
        match self {
            Dialect::MySql => format!("LIMIT {}, {}", offset, count),
            Dialect::Postgres => format!("LIMIT {} OFFSET {}", count, offset),
        }
    }
}

/// SQL text plus its ordered bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementPlan {
    pub sql: String,
    pub params: Vec<Value>,
}

impl StatementPlan {
    fn fixed(sql: String) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }
}

/// Accumulates SQL text and parameters together.
///
/// A placeholder is written at the moment its value is pushed, so clause
/// order and binding order cannot drift apart.
struct PlanWriter {
    dialect: Dialect,
    sql: String,
    params: Vec<Value>,
}

impl PlanWriter {
    fn new(dialect: Dialect, head: String) -> Self {
        Self {
            dialect,
            sql: head,
            params: Vec::new(),
        }
    }

    fn push_str(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    fn bind(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.placeholder(self.params.len());
        self.sql.push_str(&placeholder);
    }

    /// Write `col = ?` for each entry, joined by `separator`.
    fn push_assignments(&mut self, columns: &RowData, separator: &str) -> Result<(), DbError> {
        for (i, (column, value)) in columns.iter().enumerate() {
            check_identifier(column, "column name")?;
            if i > 0 {
                self.push_str(separator);
            }
            self.push_str(column);
            self.push_str(" = ");
            self.bind(value.clone());
        }
        Ok(())
    }

    /// Write a parenthesized tuple of placeholders, one per value.
    fn push_tuple(&mut self, values: impl IntoIterator<Item = Value>) {
        self.push_str("(");
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                self.push_str(", ");
            }
            self.bind(value);
        }
        self.push_str(")");
    }

    fn finish(self) -> StatementPlan {
        StatementPlan {
            sql: self.sql,
            params: self.params,
        }
    }
}

/// Reject identifiers that are empty or could end the statement early.
fn check_identifier(identifier: &str, kind: &str) -> Result<(), DbError> {
    let reason = if identifier.trim().is_empty() {
        format!("{} must not be empty", kind)
    } else if identifier.contains(';') {
        format!("{} must not contain a statement terminator", kind)
    } else if identifier.contains('\0') {
        format!("{} must not contain NUL characters", kind)
    } else {
        return Ok(());
    };
    Err(DbError::InvalidIdentifier {
        identifier: identifier.to_string(),
        reason,
    })
}

/// Builds statement plans for one dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementBuilder {
    dialect: Dialect,
}

impl StatementBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// `CREATE TABLE IF NOT EXISTS t (def, ...)`. Each column entry is an
    /// opaque definition fragment such as `id INT PRIMARY KEY`.
    pub fn create_table<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
    ) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        if columns.is_empty() {
            return Err(DbError::empty("create table requires at least one column definition"));
        }
        for column in columns {
            check_identifier(column.as_ref(), "column definition")?;
        }
        let definitions: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
        Ok(StatementPlan::fixed(format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            table,
            definitions.join(", ")
        )))
    }

    /// `INSERT INTO t (k, ...) VALUES (?, ...)` in the row's key order.
    pub fn insert(&self, table: &str, row: &RowData) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        if row.is_empty() {
            return Err(DbError::empty("insert requires at least one column"));
        }
        for column in row.keys() {
            check_identifier(column, "column name")?;
        }
        let columns: Vec<&str> = row.keys().collect();
        let mut writer = PlanWriter::new(
            self.dialect,
            format!("INSERT INTO {} ({}) VALUES ", table, columns.join(", ")),
        );
        writer.push_tuple(row.values().cloned());
        Ok(writer.finish())
    }

    /// Multi-row insert over an authoritative column list.
    ///
    /// Each row contributes one tuple in `columns` order; a column missing
    /// from a row is bound as `NULL`, so rows of different shapes can share
    /// one batch. Keys not named in `columns` are ignored.
    pub fn insert_many<S: AsRef<str>>(
        &self,
        table: &str,
        columns: &[S],
        rows: &[RowData],
    ) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        if rows.is_empty() {
            return Err(DbError::empty("insert many requires at least one row"));
        }
        if columns.is_empty() {
            return Err(DbError::empty("insert many requires at least one column"));
        }
        for column in columns {
            check_identifier(column.as_ref(), "column name")?;
        }
        let names: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
        let mut writer = PlanWriter::new(
            self.dialect,
            format!("INSERT INTO {} ({}) VALUES ", table, names.join(", ")),
        );
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                writer.push_str(", ");
            }
            writer.push_tuple(
                names
                    .iter()
                    .map(|name| row.get(name).cloned().unwrap_or(Value::Null)),
            );
        }
        Ok(writer.finish())
    }

    pub fn select_all(&self, table: &str) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        Ok(StatementPlan::fixed(format!("SELECT * FROM {}", table)))
    }

    /// Rows `from..=to`, counted from 1.
    pub fn select_paginated(
        &self,
        table: &str,
        from: u64,
        to: u64,
    ) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        if from < 1 || to < from {
            return Err(DbError::InvalidRange { from, to });
        }
        let offset = from - 1;
        let count = to - from + 1;
        Ok(StatementPlan::fixed(format!(
            "SELECT * FROM {} {}",
            table,
            self.dialect.limit_clause(offset, count)
        )))
    }

    pub fn select_by_column(
        &self,
        table: &str,
        column: &str,
        value: Value,
    ) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        let filter = FilterSet::new().with(column, value);
        let mut writer = PlanWriter::new(self.dialect, format!("SELECT * FROM {} WHERE ", table));
        writer.push_assignments(&filter, " AND ")?;
        Ok(writer.finish())
    }

    pub fn select_filtered(
        &self,
        table: &str,
        filters: &FilterSet,
    ) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        if filters.is_empty() {
            return Err(DbError::empty(
                "filtered select requires at least one filter; use select_all for every row",
            ));
        }
        let mut writer = PlanWriter::new(self.dialect, format!("SELECT * FROM {} WHERE ", table));
        writer.push_assignments(filters, " AND ")?;
        Ok(writer.finish())
    }

    /// Parameters are the assignment values followed by the filter values.
    pub fn update(
        &self,
        table: &str,
        assignments: &RowData,
        filters: &FilterSet,
    ) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        if assignments.is_empty() {
            return Err(DbError::empty("update requires at least one assignment"));
        }
        if filters.is_empty() {
            return Err(DbError::empty("update requires at least one filter"));
        }
        let mut writer = PlanWriter::new(self.dialect, format!("UPDATE {} SET ", table));
        writer.push_assignments(assignments, ", ")?;
        writer.push_str(" WHERE ");
        writer.push_assignments(filters, " AND ")?;
        Ok(writer.finish())
    }

    /// Filtered delete. An empty filter set is refused; removing every row
    /// goes through `truncate`.
    pub fn delete(&self, table: &str, filters: &FilterSet) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        if filters.is_empty() {
            return Err(DbError::UnsafeOperation {
                message: format!(
                    "delete from '{}' without filters would remove every row; use truncate",
                    table
                ),
            });
        }
        let mut writer = PlanWriter::new(self.dialect, format!("DELETE FROM {} WHERE ", table));
        writer.push_assignments(filters, " AND ")?;
        Ok(writer.finish())
    }

    pub fn truncate(&self, table: &str) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        Ok(StatementPlan::fixed(format!("TRUNCATE TABLE {}", table)))
    }

    pub fn drop_table(&self, table: &str) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        Ok(StatementPlan::fixed(format!("DROP TABLE IF EXISTS {}", table)))
    }

    /// Raw SQL passed through untouched.
    pub fn raw(&self, sql: &str) -> Result<StatementPlan, DbError> {
        if sql.trim().is_empty() {
            return Err(DbError::empty("query text is empty"));
        }
        Ok(StatementPlan::fixed(sql.to_string()))
    }

    /// Catalogue query yielding one table name per row.
    pub fn list_tables(&self) -> StatementPlan {
        match self.dialect {
            Dialect::MySql => StatementPlan::fixed("SHOW TABLES".to_string()),
            Dialect::Postgres => StatementPlan::fixed(
                "SELECT table_name::text FROM information_schema.tables \
                 WHERE table_schema = current_schema() ORDER BY table_name"
                    .to_string(),
            ),
        }
    }

    /// Catalogue query yielding the table's column names, in declared order,
    /// as the first column of each row.
    pub fn describe_columns(&self, table: &str) -> Result<StatementPlan, DbError> {
        check_identifier(table, "table name")?;
        match self.dialect {
            Dialect::MySql => Ok(StatementPlan::fixed(format!("SHOW COLUMNS FROM {}", table))),
            Dialect::Postgres => {
                let mut writer = PlanWriter::new(
                    self.dialect,
                    "SELECT column_name::text FROM information_schema.columns \
                     WHERE table_schema = current_schema() AND table_name::text = "
                        .to_string(),
                );
                writer.bind(Value::Text(table.to_string()));
                writer.push_str(" ORDER BY ordinal_position");
                Ok(writer.finish())
            }
        }
    }
}
