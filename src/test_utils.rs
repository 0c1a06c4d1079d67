//! Shared test utilities for facade and command tests.
//!
//! Provides a scripted fake driver that records every call it receives,
//! so tests can assert on acquire/release counts, executed SQL, and
//! commit/rollback behaviour without a database server.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

use crate::db::{Connection, ConnectionConfig, Connector, DbError, Dialect, Execution, Value};

/// Create a temporary file containing the given content.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Failure injection and canned responses for `FakeConnector`.
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub fail_connect: bool,
    /// Fail the n-th `execute` call (0-based, counted across connections).
    pub fail_execute_at: Option<usize>,
    pub fail_commit: bool,
    pub fail_rollback: bool,
    pub fail_close: bool,
    /// Returned by successive `execute` calls; `Execution::affected(1)`
    /// once exhausted.
    pub responses: Vec<Execution>,
}

/// What the fake driver observed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    pub acquired: usize,
    pub closed: usize,
    pub commits: usize,
    pub rollbacks: usize,
    pub executed: Vec<(String, Vec<Value>)>,
}

#[derive(Debug, Default)]
struct State {
    stats: Stats,
    responses: VecDeque<Execution>,
    executes: usize,
}

/// In-process `Connector` that never touches the network.
#[derive(Debug, Clone)]
pub struct FakeConnector {
    script: Script,
    dialect: Dialect,
    state: Arc<Mutex<State>>,
}

impl FakeConnector {
    pub fn new(script: Script) -> Self {
        let state = State {
            responses: script.responses.iter().cloned().collect(),
            ..State::default()
        };
        Self {
            script,
            dialect: Dialect::MySql,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Snapshot of everything recorded so far.
    pub fn stats(&self) -> Stats {
        self.state.lock().unwrap().stats.clone()
    }

    pub fn config() -> ConnectionConfig {
        ConnectionConfig::new("fake", 5432, "test", "tester", None)
    }
}

impl Connector for FakeConnector {
    fn connect(&self, _config: &ConnectionConfig) -> Result<Box<dyn Connection>, DbError> {
        if self.script.fail_connect {
            return Err(DbError::Connection {
                message: "simulated connect failure".to_string(),
            });
        }
        self.state.lock().unwrap().stats.acquired += 1;
        Ok(Box::new(FakeConnection {
            script: self.script.clone(),
            state: Arc::clone(&self.state),
            open: true,
        }))
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn backend_name(&self) -> &'static str {
        "Fake"
    }
}

struct FakeConnection {
    script: Script,
    state: Arc<Mutex<State>>,
    open: bool,
}

impl Connection for FakeConnection {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Execution, DbError> {
        let mut state = self.state.lock().unwrap();
        let index = state.executes;
        state.executes += 1;
        state.stats.executed.push((sql.to_string(), params.to_vec()));
        if self.script.fail_execute_at == Some(index) {
            return Err(DbError::Execution {
                message: "simulated statement failure".to_string(),
            });
        }
        Ok(state
            .responses
            .pop_front()
            .unwrap_or_else(|| Execution::affected(1)))
    }

    fn commit(&mut self) -> Result<(), DbError> {
        if self.script.fail_commit {
            return Err(DbError::Execution {
                message: "simulated commit failure".to_string(),
            });
        }
        self.state.lock().unwrap().stats.commits += 1;
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), DbError> {
        self.state.lock().unwrap().stats.rollbacks += 1;
        if self.script.fail_rollback {
            return Err(DbError::Connection {
                message: "simulated rollback failure".to_string(),
            });
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), DbError> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        self.state.lock().unwrap().stats.closed += 1;
        if self.script.fail_close {
            return Err(DbError::Connection {
                message: "simulated close failure".to_string(),
            });
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
