//! End-to-end CRUD behavior of the request client against a live server.

use chrono::Utc;
use taskdeck_core::{Category, Priority, TaskDraft, TaskId};

use crate::helpers::{TestServer, draft};

#[tokio::test]
async fn test_create_returns_server_assigned_fields() {
    let server = TestServer::spawn().await;
    let api = server.client();

    let before = Utc::now();
    let task = api.create_task(&draft("first")).await.unwrap();

    // Neither field was sent; both come back assigned by the server.
    assert_eq!(task.id, TaskId::new(1));
    assert!(task.created_at >= before);
    assert!(task.created_at <= Utc::now());
}

#[tokio::test]
async fn test_list_then_get_yields_matching_task() {
    let server = TestServer::spawn().await;
    let api = server.client();

    api.create_task(&draft("one")).await.unwrap();
    api.create_task(&draft("two")).await.unwrap();

    let listed = api.list_tasks().await.unwrap();
    assert_eq!(listed.len(), 2);

    for entry in &listed {
        let fetched = api.task(entry.id).await.unwrap();
        assert_eq!(&fetched, entry);
    }
}

#[tokio::test]
async fn test_update_then_get_returns_updated_fields() {
    let server = TestServer::spawn().await;
    let api = server.client();

    let created = api.create_task(&draft("draft title")).await.unwrap();

    let replacement = TaskDraft {
        title: "final title".to_string(),
        description: "now with details".to_string(),
        priority: Priority::High,
        category: Category::Work,
        important: true,
        completed: false,
    };
    let updated = api.update_task(created.id, &replacement).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "final title");
    assert_eq!(updated.priority, Priority::High);

    let fetched = api.task(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_delete_then_get_fails() {
    let server = TestServer::spawn().await;
    let api = server.client();

    let task = api.create_task(&draft("doomed")).await.unwrap();
    api.delete_task(task.id).await.unwrap();

    assert!(api.task(task.id).await.is_err());
    assert!(api.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_operations_on_missing_ids_fail() {
    let server = TestServer::spawn().await;
    let api = server.client();

    let ghost = TaskId::new(404);
    assert!(api.task(ghost).await.is_err());
    assert!(api.update_task(ghost, &draft("nobody")).await.is_err());
    assert!(api.delete_task(ghost).await.is_err());
}

#[tokio::test]
async fn test_independent_requests_share_one_client() {
    let server = TestServer::spawn().await;
    let api = server.client();

    // Fire a batch of creates concurrently; each is an independent request
    // with no ordering guarantee, so only the resulting set is checked.
    let mut handles = Vec::new();
    for index in 0..5 {
        let api = api.clone();
        handles.push(tokio::spawn(async move {
            api.create_task(&draft(&format!("task {index}"))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let listed = api.list_tasks().await.unwrap();
    assert_eq!(listed.len(), 5);

    let mut ids: Vec<u64> = listed.iter().map(|task| task.id.as_u64()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5, "ids must be unique");
}
