//! Service layer exposing every storage operation.
//!
//! `RollService` wraps `RollDb` (raw database access). All repo methods are
//! implemented as `impl RollService` blocks under [`crate::repos`], and every
//! one of them takes the already-authenticated `user_id` as its first argument.

use roll_config::DatabaseConfig;

use crate::RollDb;
use crate::error::DatabaseError;

pub struct RollService {
    db: RollDb,
}

impl RollService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = RollDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Open the database described by configuration, creating its parent
    /// directory when it is file-backed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Other` if the directory cannot be created, or
    /// any error from [`Self::new_local`].
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if let Some(parent) = config.parent_dir() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::Other(anyhow::anyhow!(
                    "failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        Self::new_local(&config.path).await
    }

    /// Create from an existing `RollDb` (for testing).
    #[must_use]
    pub const fn from_db(db: RollDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &RollDb {
        &self.db
    }
}
