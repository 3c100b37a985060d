#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Once};

use hpkeeper::services::memory_store::MemoryCharacterStore;
use hpkeeper::services::seeder;
use hpkeeper::services::store::CharacterStore;
use tokio::net::TcpListener;

pub const FIXTURE_DIR: &str = "tests/data/characters";

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("hpkeeper=debug")
            .with_test_writer()
            .init();
    });
}

/// Returns an in-memory store seeded with the fixture characters.
pub async fn seeded_memory_store() -> Arc<MemoryCharacterStore> {
    let store = Arc::new(MemoryCharacterStore::new());
    let report = seeder::load_all(store.as_ref(), Path::new(FIXTURE_DIR))
        .await
        .expect("Failed to seed fixture characters");
    assert!(report.failed.is_empty(), "Fixture seeding failed: {report:?}");
    store
}

/// Spawns the application on a random port and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(store: Arc<dyn CharacterStore>) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, hpkeeper::app(store)).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health-check"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}

/// Spawns the application on the seeded in-memory store.
pub async fn spawn_seeded_app() -> (String, Arc<MemoryCharacterStore>) {
    let store = seeded_memory_store().await;
    let address = spawn_app(store.clone()).await;
    (address, store)
}

/// Fetches a character document, asserting it exists.
pub async fn fetch_character(
    client: &reqwest::Client,
    address: &str,
    name: &str,
) -> serde_json::Value {
    let response = client
        .get(format!("{address}/character/{name}"))
        .send()
        .await
        .expect("Failed to fetch character");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    response.json().await.expect("Failed to parse character")
}
