//! Error types shared by the SQLite storage implementation.

use thiserror::Error;

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while interacting with SQLite.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// The database file could not be opened or created.
    #[error("failed to open SQLite database `{path}`")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Creating the tables failed.
    #[error("failed to create SQLite schema")]
    Schema {
        #[source]
        source: rusqlite::Error,
    },
    /// An INSERT statement was rejected.
    #[error("failed to insert into `{table}`")]
    Insert {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    /// A SELECT statement failed to prepare or run.
    #[error("failed to query `{table}`")]
    Query {
        table: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    /// A timestamp could not be rendered into its column format.
    #[error("failed to encode timestamp for column `{column}`")]
    EncodeTimestamp {
        column: &'static str,
        #[source]
        source: time::error::Format,
    },
    /// A stored timestamp does not match the expected column format.
    #[error("invalid timestamp `{value}` in column `{column}`")]
    DecodeTimestamp {
        column: &'static str,
        value: String,
        #[source]
        source: time::error::Parse,
    },
    /// A JSON text column could not be encoded or decoded.
    #[error("invalid JSON in column `{column}`")]
    Json {
        column: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// A column holds a value outside its domain.
    #[error("invalid value in column `{column}`: {message}")]
    InvalidColumn {
        column: &'static str,
        message: String,
    },
    /// The blocking worker running the statement panicked or was cancelled.
    #[error("SQLite worker task failed")]
    Worker {
        #[source]
        source: tokio::task::JoinError,
    },
}
