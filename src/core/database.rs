use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::core::config::DatabaseConfig;

/// Opens a fresh database connection for each operation.
///
/// There is no pool: every request opens one connection, runs its
/// statements, and drops it. Connection failures surface to the caller
/// unretried.
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    options: PgConnectOptions,
}

impl ConnectionProvider {
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .database(&config.name)
            .username(&config.user)
            .password(&config.password);

        Self { options }
    }

    pub async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
        PgConnection::connect_with(&self.options).await
    }
}
