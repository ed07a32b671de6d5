mod config;
mod error;
mod models;
mod store;

pub use config::SqliteConfig;
pub use error::{SqliteDaoError, SqliteResult};
pub use store::SqliteGameStore;

use crate::dao::storage::StorageError;

impl From<SqliteDaoError> for StorageError {
    fn from(err: SqliteDaoError) -> Self {
        StorageError::backend(err.to_string(), err)
    }
}
