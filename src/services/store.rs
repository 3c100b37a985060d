//! # Character Store
//!
//! The persistence seam of the service. Handlers and the seeder only see the
//! [`CharacterStore`] trait; the concrete store is picked at startup by
//! [`connect_from_env`].
//!
//! ## Implementations
//!
//! - [`PgCharacterStore`](super::pg_store::PgCharacterStore) - PostgreSQL via sqlx
//! - [`MemoryCharacterStore`](super::memory_store::MemoryCharacterStore) - process-local,
//!   used when no database is configured and in tests

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::memory_store::MemoryCharacterStore;
use super::pg_store::PgCharacterStore;
use crate::models::Character;
use crate::utils::constant::{DATABASE_URL_ENV, DATABASE_URL_FILE_ENV, DB_ACQUIRE_TIMEOUT};
use crate::utils::secret::get_secret;
use crate::utils::static_object::DB_MAX_CONNECTIONS;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error")]
    Db(#[from] sqlx::Error),

    #[error("migration failed")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("character {0} no longer exists")]
    Missing(Uuid),

    #[error("character {0} already exists")]
    DuplicateId(Uuid),
}

/// Storage for character records.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Finds the earliest stored character whose name contains `query`,
    /// ignoring case. See [`crate::models::name_matches`].
    async fn find_by_name(&self, query: &str) -> Result<Option<Character>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Character>, StoreError>;

    /// Adds a new record.
    ///
    /// # Errors
    ///
    /// Fails if a record with `character.id` is already stored.
    async fn insert(&self, character: &Character) -> Result<(), StoreError>;

    /// Writes back `hit_points` and `temp_hp` of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Missing`] if no record has `character.id`.
    async fn save_hit_points(&self, character: &Character) -> Result<(), StoreError>;
}

/// Builds the store from `DATABASE_URL` (or a `DATABASE_URL_FILE` secret).
/// See [`connect`].
pub async fn connect_from_env() -> Arc<dyn CharacterStore> {
    connect(get_secret(DATABASE_URL_FILE_ENV, DATABASE_URL_ENV)).await
}

/// Builds the store for `database_url`.
///
/// With a URL, returns a PostgreSQL store on a lazily connected pool and
/// runs pending migrations. Connection or migration failures are logged and
/// the store is returned anyway; requests will fail until the database
/// becomes reachable. An unparsable URL is logged and treated as absent.
///
/// Without a database URL, falls back to [`MemoryCharacterStore`].
pub async fn connect(database_url: Option<String>) -> Arc<dyn CharacterStore> {
    let Some(database_url) = database_url else {
        warn!("No database configured, characters are kept in memory only");
        return Arc::new(MemoryCharacterStore::new());
    };

    let pool = match PgPoolOptions::new()
        .max_connections(*DB_MAX_CONNECTIONS)
        .acquire_timeout(DB_ACQUIRE_TIMEOUT)
        .connect_lazy(&database_url)
    {
        Ok(pool) => pool,
        Err(e) => {
            error!(?e, "Invalid database URL, falling back to in-memory store");
            return Arc::new(MemoryCharacterStore::new());
        }
    };

    let store = PgCharacterStore::new(pool);
    match store.migrate().await {
        Ok(()) => info!("Connected to PostgreSQL"),
        Err(e) => error!(?e, "Could not prepare PostgreSQL, continuing degraded"),
    }

    Arc::new(store)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn briv() -> Character {
        serde_json::from_value(json!({ "name": "Briv", "hitPoints": 25 })).unwrap()
    }

    #[test_log::test(tokio::test)]
    async fn missing_url_uses_memory_store() {
        let store = connect(None).await;

        store.insert(&briv()).await.unwrap();
        assert!(store.find_by_name("briv").await.unwrap().is_some());
    }

    #[test_log::test(tokio::test)]
    async fn invalid_url_falls_back_to_memory_store() {
        let store = connect(Some("not a database url".to_string())).await;

        store.insert(&briv()).await.unwrap();
        assert!(store.find_by_name("briv").await.unwrap().is_some());
    }

    #[test_log::test(tokio::test)]
    async fn unreachable_database_starts_degraded() {
        // Nothing listens on port 1; migrations fail and are only logged.
        let store = connect(Some("postgres://hpkeeper@127.0.0.1:1/game".to_string())).await;

        assert!(matches!(
            store.find_by_name("briv").await,
            Err(StoreError::Db(_))
        ));
    }
}
