use async_trait::async_trait;
use sqlx::{PgPool, types::Json};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::store::{CharacterStore, StoreError};
use crate::models::Character;

/// PostgreSQL-backed [`CharacterStore`].
///
/// Nested sequences and stats live in JSONB columns. Lookups compare
/// `lower(name)` with `strpos`, so the query is never interpreted as a
/// pattern.
#[derive(Clone)]
pub struct PgCharacterStore {
    pool: PgPool,
}

impl PgCharacterStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations in `./migrations`.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!().run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CharacterStore for PgCharacterStore {
    #[instrument(skip(self))]
    async fn find_by_name(&self, query: &str) -> Result<Option<Character>, StoreError> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            SELECT id, name, level, hit_points, temp_hp, classes, stats, items, defenses
            FROM characters
            WHERE strpos(lower(name), lower($1)) > 0
            ORDER BY seq ASC
            LIMIT 1
            "#,
        )
        .bind(query)
        .fetch_optional(&self.pool)
        .await?;

        debug!(found = character.is_some(), "Looked up character by name");
        Ok(character)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Character>, StoreError> {
        let character = sqlx::query_as::<_, Character>(
            r#"
            SELECT id, name, level, hit_points, temp_hp, classes, stats, items, defenses
            FROM characters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(character)
    }

    #[instrument(skip_all, fields(name = %character.name))]
    async fn insert(&self, character: &Character) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO characters
                (id, name, level, hit_points, temp_hp, classes, stats, items, defenses)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(character.id)
        .bind(&character.name)
        .bind(character.level)
        .bind(character.hit_points)
        .bind(character.temp_hp)
        .bind(Json(&character.classes))
        .bind(Json(&character.stats))
        .bind(Json(&character.items))
        .bind(Json(&character.defenses))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip_all, fields(id = %character.id))]
    async fn save_hit_points(&self, character: &Character) -> Result<(), StoreError> {
        let result =
            sqlx::query("UPDATE characters SET hit_points = $1, temp_hp = $2 WHERE id = $3")
                .bind(character.hit_points)
                .bind(character.temp_hp)
                .bind(character.id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing(character.id));
        }
        Ok(())
    }
}
