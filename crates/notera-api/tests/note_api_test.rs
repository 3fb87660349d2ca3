//! End-to-end tests for the note endpoints.

mod common;

use common::{register_and_login, spawn_test_server};

async fn create_note(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    title: &str,
) -> serde_json::Value {
    let response = client
        .post(format!("{base_url}/api/notes"))
        .header("Authorization", token)
        .json(&serde_json::json!({
            "title": title,
            "description": "a description",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    body["data"].clone()
}

#[tokio::test]
async fn test_note_routes_require_auth() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();

    let create = client
        .post(format!("{base_url}/api/notes"))
        .json(&serde_json::json!({ "title": "t", "description": "d" }))
        .send()
        .await
        .unwrap();
    assert_eq!(create.status(), 401);

    let search = client
        .get(format!("{base_url}/api/notes"))
        .send()
        .await
        .unwrap();
    assert_eq!(search.status(), 401);

    let get_one = client
        .get(format!("{base_url}/api/notes/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(get_one.status(), 401);
}

#[tokio::test]
async fn test_create_derives_slug_from_title() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base_url, "alice").await;

    let note = create_note(&client, &base_url, &token, "Test Judul Catatan").await;

    assert_eq!(note["title"], "Test Judul Catatan");
    assert_eq!(note["slug"], "test-judul-catatan");
    assert_eq!(note["description"], "a description");
    assert!(note["id"].as_i64().unwrap() > 0);
    assert_eq!(note["created_at"], note["updated_at"]);
    // The owner is implicit in the token, never echoed back.
    assert!(note.get("owner_username").is_none());
}

#[tokio::test]
async fn test_create_rejects_empty_title() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base_url, "alice").await;

    let response = client
        .post(format!("{base_url}/api/notes"))
        .header("Authorization", &token)
        .json(&serde_json::json!({ "title": "", "description": "d" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"], "Title must not be empty");
}

#[tokio::test]
async fn test_get_returns_own_note_only() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let alice = register_and_login(&client, &base_url, "alice").await;
    let bob = register_and_login(&client, &base_url, "bob").await;

    let note = create_note(&client, &base_url, &alice, "Alice Note").await;
    let id = note["id"].as_i64().unwrap();

    let own = client
        .get(format!("{base_url}/api/notes/{id}"))
        .header("Authorization", &alice)
        .send()
        .await
        .unwrap();
    assert_eq!(own.status(), 200);

    // Someone else's note looks exactly like a missing one.
    let foreign = client
        .get(format!("{base_url}/api/notes/{id}"))
        .header("Authorization", &bob)
        .send()
        .await
        .unwrap();
    assert_eq!(foreign.status(), 404);
    let body: serde_json::Value = foreign.json().await.unwrap();
    assert_eq!(body["errors"], "Note not found");
}

#[tokio::test]
async fn test_get_rejects_non_numeric_id() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base_url, "alice").await;

    let response = client
        .get(format!("{base_url}/api/notes/abc"))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"], "Note id must be a number");
}

#[tokio::test]
async fn test_update_changes_title_keeps_slug() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base_url, "alice").await;

    let note = create_note(&client, &base_url, &token, "Original Title").await;
    let id = note["id"].as_i64().unwrap();

    let response = client
        .put(format!("{base_url}/api/notes/{id}"))
        .header("Authorization", &token)
        .json(&serde_json::json!({
            "title": "New Title",
            "description": "new description",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["title"], "New Title");
    assert_eq!(body["data"]["description"], "new description");
    assert_eq!(body["data"]["slug"], "original-title");
    assert_eq!(body["data"]["created_at"], note["created_at"]);
}

#[tokio::test]
async fn test_update_foreign_note_is_not_found() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let alice = register_and_login(&client, &base_url, "alice").await;
    let bob = register_and_login(&client, &base_url, "bob").await;

    let note = create_note(&client, &base_url, &alice, "Alice Note").await;
    let id = note["id"].as_i64().unwrap();

    let response = client
        .put(format!("{base_url}/api/notes/{id}"))
        .header("Authorization", &bob)
        .json(&serde_json::json!({ "title": "stolen", "description": "d" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_delete_then_delete_again_is_not_found() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base_url, "alice").await;

    let note = create_note(&client, &base_url, &token, "ephemeral").await;
    let id = note["id"].as_i64().unwrap();

    let first = client
        .delete(format!("{base_url}/api/notes/{id}"))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);
    let body: serde_json::Value = first.json().await.unwrap();
    assert_eq!(body["data"], true);

    let second = client
        .delete(format!("{base_url}/api/notes/{id}"))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 404);
}

#[tokio::test]
async fn test_search_defaults_to_first_page_of_ten() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base_url, "alice").await;

    for i in 0..15 {
        create_note(&client, &base_url, &token, &format!("note {i}")).await;
    }

    let response = client
        .get(format!("{base_url}/api/notes"))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["paging"]["current_page"], 1);
    assert_eq!(body["paging"]["size"], 10);
    assert_eq!(body["paging"]["total_page"], 2);
}

#[tokio::test]
async fn test_search_with_explicit_page_and_size() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base_url, "alice").await;

    for i in 0..15 {
        create_note(&client, &base_url, &token, &format!("note {i}")).await;
    }

    let response = client
        .get(format!("{base_url}/api/notes?page=2&size=5"))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["paging"]["current_page"], 2);
    assert_eq!(body["paging"]["total_page"], 3);
}

#[tokio::test]
async fn test_search_title_filter_and_empty_result() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base_url, "alice").await;

    create_note(&client, &base_url, &token, "groceries").await;
    create_note(&client, &base_url, &token, "grocery run").await;
    create_note(&client, &base_url, &token, "meeting notes").await;

    let filtered = client
        .get(format!("{base_url}/api/notes?title=grocer"))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = filtered.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["paging"]["total_page"], 1);

    let none = client
        .get(format!("{base_url}/api/notes?title=nomatch"))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = none.json().await.unwrap();
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["paging"]["total_page"], 0);
}

#[tokio::test]
async fn test_search_is_scoped_to_the_caller() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let alice = register_and_login(&client, &base_url, "alice").await;
    let bob = register_and_login(&client, &base_url, "bob").await;

    create_note(&client, &base_url, &alice, "alice one").await;
    create_note(&client, &base_url, &alice, "alice two").await;
    create_note(&client, &base_url, &bob, "bob one").await;

    let response = client
        .get(format!("{base_url}/api/notes"))
        .header("Authorization", &bob)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["title"], "bob one");
}

#[tokio::test]
async fn test_search_rejects_out_of_bounds_size() {
    let base_url = spawn_test_server().await;
    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base_url, "alice").await;

    let response = client
        .get(format!("{base_url}/api/notes?size=101"))
        .header("Authorization", &token)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"], "Size must be between 1 and 100");
}
