//! Database access layer.
//!
//! This module provides the query facade used by the CLI and by library
//! callers:
//! - Statement building with bound parameters (`builder`)
//! - Connection acquisition and release per call (`connection`)
//! - Transactional execution of plans (`facade`)
//! - Result row mapping into ordered records (`mapper`)
//!
//! # Architecture
//!
//! The driver sits behind the `Connector`/`Connection` traits in `backend`.
//! The only production driver is PostgreSQL (`postgres`); tests use an
//! in-process fake that records every call it receives.
//!
//! # Type Decisions
//!
//! **Why are identifiers interpolated?**
//! SQL grammar does not allow table or column names as bound parameters.
//! Identifiers are expected to come from trusted call sites; the builder
//! only rejects empty names and statement terminators. Values are always
//! bound and never appear in SQL text.
//!
//! **Why an ordered `RowData` rather than `HashMap`?**
//! Column order in SQL text and value order in the parameter list must
//! agree, and result records should keep the declared column order.

mod backend;
mod builder;
mod config;
mod connection;
mod facade;
mod mapper;
pub mod postgres;
mod row;
mod value;

pub use backend::{Connection, Connector, Execution};
pub use builder::{Dialect, StatementBuilder, StatementPlan};
pub use config::ConnectionConfig;
pub use connection::ConnectionScope;
pub use facade::{QueryFacade, QueryResult, INSERT_CHUNK_SIZE};
pub use mapper::map_rows;
pub use row::{FilterSet, RowData};
pub use value::Value;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to database: {message}")]
    Connection { message: String },

    #[error("Statement failed: {message}")]
    Execution { message: String },

    #[error("Invalid identifier '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    #[error("Empty input: {what}")]
    EmptyInput { what: String },

    #[error("Invalid range: from {from} to {to} (bounds are 1-based and inclusive)")]
    InvalidRange { from: u64, to: u64 },

    #[error("Unsafe operation refused: {message}")]
    UnsafeOperation { message: String },

    #[error("Rollback failed after error ({cause}); rollback error: {rollback}")]
    RollbackFailed {
        #[source]
        cause: Box<DbError>,
        rollback: Box<DbError>,
    },
}

impl DbError {
    pub(crate) fn empty(what: impl Into<String>) -> Self {
        DbError::EmptyInput { what: what.into() }
    }
}
