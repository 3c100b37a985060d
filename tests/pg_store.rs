mod common;

use std::path::Path;
use std::sync::Arc;

use common::{FIXTURE_DIR, fetch_character, spawn_app};
use hpkeeper::models::Character;
use hpkeeper::services::pg_store::PgCharacterStore;
use hpkeeper::services::seeder;
use hpkeeper::services::store::{CharacterStore, StoreError};
use serde_json::json;
use sqlx::PgPool;

fn character(name: &str, hit_points: i32) -> Character {
    serde_json::from_value(json!({
        "name": name,
        "level": 2,
        "hitPoints": hit_points,
        "defenses": [{ "type": "cold", "defense": "resistance" }]
    }))
    .unwrap()
}

#[sqlx::test]
async fn test_insert_and_lookup_round_trip(pool: PgPool) {
    let store = PgCharacterStore::new(pool);
    let briv = character("Briv", 25);
    store.insert(&briv).await.unwrap();

    let found = store.find_by_name("bRi").await.unwrap().expect("Briv should match");
    assert_eq!(found, briv);

    let by_id = store.find_by_id(briv.id).await.unwrap();
    assert_eq!(by_id, Some(briv));
}

#[sqlx::test]
async fn test_lookup_is_literal_and_ordered(pool: PgPool) {
    let store = PgCharacterStore::new(pool);
    store.insert(&character("Tasha the Witch", 9)).await.unwrap();
    store.insert(&character("Tasha", 9)).await.unwrap();

    let found = store.find_by_name("TASHA").await.unwrap().unwrap();
    assert_eq!(found.name, "Tasha the Witch");

    assert!(store.find_by_name(".*").await.unwrap().is_none());
    assert!(store.find_by_name("%").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_save_hit_points(pool: PgPool) {
    let store = PgCharacterStore::new(pool);
    let mut briv = character("Briv", 25);
    store.insert(&briv).await.unwrap();

    briv.hit_points = 12;
    briv.temp_hp = 3;
    store.save_hit_points(&briv).await.unwrap();

    let stored = store.find_by_id(briv.id).await.unwrap().unwrap();
    assert_eq!((stored.hit_points, stored.temp_hp), (12, 3));

    let ghost = character("Ghost", 1);
    assert!(matches!(
        store.save_hit_points(&ghost).await,
        Err(StoreError::Missing(id)) if id == ghost.id
    ));
}

#[sqlx::test]
async fn test_seeding_is_idempotent(pool: PgPool) {
    let store = PgCharacterStore::new(pool.clone());

    let first = seeder::load_all(&store, Path::new(FIXTURE_DIR)).await.unwrap();
    let second = seeder::load_all(&store, Path::new(FIXTURE_DIR)).await.unwrap();

    assert_eq!(first.inserted.len(), 2);
    assert!(second.inserted.is_empty());
    assert_eq!(second.existing.len(), 2);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}

#[sqlx::test]
async fn test_damage_is_persisted(pool: PgPool) {
    let store = Arc::new(PgCharacterStore::new(pool));
    seeder::load_all(store.as_ref(), Path::new(FIXTURE_DIR))
        .await
        .unwrap();
    let address = spawn_app(store).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{address}/dealDamage"))
        .json(&json!({"characterName": "vex", "damageType": "poison", "damage": 13}))
        .send()
        .await
        .expect("Failed to execute request");
    // Resisted down to 6: 5 absorbed by temporary HP, 1 taken from hit points.
    assert_eq!(
        response.text().await.unwrap(),
        "Vex'ahlia took 6 poison damage. Current HP: 17"
    );

    let vex = fetch_character(&client, &address, "vex").await;
    assert_eq!(vex["hitPoints"], 17);
    assert_eq!(vex["tempHP"], 0);
}

#[sqlx::test]
async fn test_duplicate_id_is_rejected(pool: PgPool) {
    let store = PgCharacterStore::new(pool);
    let alpha = character("Alpha", 30);
    let mut bravo = character("Bravo", 30);
    bravo.id = alpha.id;
    store.insert(&alpha).await.unwrap();

    assert!(matches!(store.insert(&bravo).await, Err(StoreError::Db(_))));
    assert!(store.find_by_name("Bravo").await.unwrap().is_none());
}
