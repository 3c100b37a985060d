mod common;

use std::sync::Arc;

use common::spawn_app;
use hpkeeper::services::memory_store::MemoryCharacterStore;

#[tokio::test]
async fn health_check_works() {
    let address = spawn_app(Arc::new(MemoryCharacterStore::new())).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{address}/health-check"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(Some(0), response.content_length());
}
