use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{CharacterStore, StoreError};
use crate::models::Character;

/// Process-local [`CharacterStore`]. Records keep insertion order, which is
/// the tie-break for ambiguous name lookups.
#[derive(Debug, Default)]
pub struct MemoryCharacterStore {
    characters: RwLock<Vec<Character>>,
}

impl MemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.characters.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.characters.read().await.is_empty()
    }
}

#[async_trait]
impl CharacterStore for MemoryCharacterStore {
    async fn find_by_name(&self, query: &str) -> Result<Option<Character>, StoreError> {
        let characters = self.characters.read().await;
        Ok(characters.iter().find(|c| c.matches_name(query)).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Character>, StoreError> {
        let characters = self.characters.read().await;
        Ok(characters.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, character: &Character) -> Result<(), StoreError> {
        let mut characters = self.characters.write().await;
        if characters.iter().any(|c| c.id == character.id) {
            return Err(StoreError::DuplicateId(character.id));
        }
        characters.push(character.clone());
        Ok(())
    }

    async fn save_hit_points(&self, character: &Character) -> Result<(), StoreError> {
        let mut characters = self.characters.write().await;
        let stored = characters
            .iter_mut()
            .find(|c| c.id == character.id)
            .ok_or(StoreError::Missing(character.id))?;

        stored.hit_points = character.hit_points;
        stored.temp_hp = character.temp_hp;
        Ok(())
    }
}
