use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Character;
use crate::services::hit_points::Resolution;
use crate::services::store::CharacterStore;
use crate::utils::constant::CHARACTER_NOT_FOUND;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Where characters are read from and written back to.
    pub store: Arc<dyn CharacterStore>,
    /// One mutex per character id, serializing read-modify-write sequences.
    pub character_locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl AppState {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        info!("Initializing application state");
        Self {
            store,
            character_locks: DashMap::new(),
        }
    }

    /// Looks a character up by (partial, case-insensitive) name.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] when no stored name contains `name`.
    pub async fn find_character(&self, name: &str) -> AppResult<Character> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or(AppError::NotFound(CHARACTER_NOT_FOUND))
    }

    /// Runs `resolve` against the current record of the character matching
    /// `name` and persists it when the outcome reports a change.
    ///
    /// The record is re-read under the character's lock, so concurrent
    /// requests against one character apply one after another instead of
    /// overwriting each other.
    #[instrument(skip(self, resolve))]
    pub async fn update_character<R, F>(&self, name: &str, resolve: F) -> AppResult<R>
    where
        R: Resolution,
        F: FnOnce(&mut Character) -> R,
    {
        let id = self.find_character(name).await?.id;

        let lock = Arc::clone(self.character_locks.entry(id).or_default().value());
        let _guard = lock.lock().await;

        let Some(mut character) = self.store.find_by_id(id).await? else {
            warn!(%id, "Character disappeared before it could be updated");
            return Err(AppError::NotFound(CHARACTER_NOT_FOUND));
        };

        let outcome = resolve(&mut character);
        if outcome.mutated() {
            self.store.save_hit_points(&character).await?;
            debug!(
                %id,
                hit_points = character.hit_points,
                temp_hp = character.temp_hp,
                "Persisted hit points"
            );
        }

        Ok(outcome)
    }
}
