//! Wire-level contract of the REST resource, checked with a raw HTTP client.

use serde_json::{Value, json};

use crate::helpers::TestServer;

#[tokio::test]
async fn test_create_responds_201_with_the_stored_task() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    let response = http
        .post(server.url("/api/tasks"))
        .json(&json!({"title": "wire check"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "wire check");
    // Omitted draft fields materialize with their defaults.
    assert_eq!(body["priority"], "medium");
    assert_eq!(body["category"], "other");
    assert_eq!(body["important"], false);
    assert_eq!(body["completed"], false);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_client_supplied_id_and_created_at_are_ignored() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    let response = http
        .post(server.url("/api/tasks"))
        .json(&json!({
            "title": "sneaky",
            "id": 999,
            "created_at": "1970-01-01T00:00:00Z"
        }))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_ne!(body["created_at"], "1970-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_delete_responds_204_with_empty_body() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    http.post(server.url("/api/tasks"))
        .json(&json!({"title": "short-lived"}))
        .send()
        .await
        .unwrap();

    let response = http
        .delete(server.url("/api/tasks/1"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 204);
    assert!(response.bytes().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_task_responds_404_with_detail_body() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    for request in [
        http.get(server.url("/api/tasks/7")),
        http.put(server.url("/api/tasks/7")).json(&json!({"title": "x"})),
        http.delete(server.url("/api/tasks/7")),
    ] {
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), 404);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["detail"], "Task not found");
    }
}

#[tokio::test]
async fn test_list_responds_with_a_json_array() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    let response = http.get(server.url("/api/tasks")).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_put_replaces_the_whole_task() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    http.post(server.url("/api/tasks"))
        .json(&json!({
            "title": "full",
            "description": "has a description",
            "important": true
        }))
        .send()
        .await
        .unwrap();

    // A replacement that omits fields resets them to their defaults; PUT is
    // not a merge.
    let response = http
        .put(server.url("/api/tasks/1"))
        .json(&json!({"title": "bare"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["title"], "bare");
    assert_eq!(body["description"], "");
    assert_eq!(body["important"], false);
}
