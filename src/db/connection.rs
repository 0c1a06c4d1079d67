//! Scoped connection acquisition.

use tracing::{debug, warn};

use super::backend::{Connection, Connector};
use super::config::ConnectionConfig;
use super::DbError;

/// A connection that is closed when the scope ends.
///
/// Release happens in `Drop`, so every exit path of a call, including early
/// returns through `?` and panics, closes the connection exactly once. A
/// close failure is logged and never replaces the call's own result.
pub struct ConnectionScope {
    connection: Box<dyn Connection>,
    backend: &'static str,
}

impl ConnectionScope {
    /// Open a connection. If this fails there is nothing to release.
    pub fn acquire(connector: &dyn Connector, config: &ConnectionConfig) -> Result<Self, DbError> {
        let connection = connector.connect(config)?;
        debug!(
            backend = connector.backend_name(),
            host = %config.host,
            database = %config.database,
            "connection acquired"
        );
        Ok(Self {
            connection,
            backend: connector.backend_name(),
        })
    }

    pub fn connection(&mut self) -> &mut dyn Connection {
        self.connection.as_mut()
    }
}

impl Drop for ConnectionScope {
    fn drop(&mut self) {
        if !self.connection.is_open() {
            return;
        }
        match self.connection.close() {
            Ok(()) => debug!(backend = self.backend, "connection released"),
            Err(e) => warn!(backend = self.backend, error = %e, "failed to close connection"),
        }
    }
}
