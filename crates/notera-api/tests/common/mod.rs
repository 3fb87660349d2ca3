//! Shared helpers for the HTTP integration tests.
//!
//! Each test gets its own server on an ephemeral port, backed by fresh
//! in-memory stores, so tests stay independent and need no database.

use notera_api::{router, test_support::memory_state};

/// Spawn the full router on `127.0.0.1:0` and return its base URL.
pub async fn spawn_test_server() -> String {
    let app = router(memory_state());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give server a moment to start
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    format!("http://{}", addr)
}

/// Register `username` and log in, returning the session token.
pub async fn register_and_login(client: &reqwest::Client, base_url: &str, username: &str) -> String {
    let response = client
        .post(format!("{base_url}/api/users"))
        .json(&serde_json::json!({
            "username": username,
            "password": "secret123",
            "name": "Test User",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{base_url}/api/users/login"))
        .json(&serde_json::json!({
            "username": username,
            "password": "secret123",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    body["data"]["token"].as_str().unwrap().to_string()
}
