//! Page routing end-to-end: non-API paths resolve through the route table.

use crate::helpers::TestServer;

#[tokio::test]
async fn test_known_pages_render_with_200() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    for (path, marker) in [
        ("/", "data-page=\"home\""),
        ("/tasks", "data-page=\"tasks\""),
        ("/tasks/new", "data-page=\"task-new\""),
    ] {
        let response = http.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status(), 200, "path {path}");

        let html = response.text().await.unwrap();
        assert!(html.contains(marker), "path {path}");
    }
}

#[tokio::test]
async fn test_edit_page_binds_the_id_parameter() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    let response = http
        .get(server.url("/tasks/42/edit"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let html = response.text().await.unwrap();
    assert!(html.contains("Edit task 42"));
}

#[tokio::test]
async fn test_unmatched_paths_render_not_found_with_404() {
    let server = TestServer::spawn().await;
    let http = reqwest::Client::new();

    for path in ["/nowhere", "/tasks/42", "/tasks/42/edit/deeper"] {
        let response = http.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status(), 404, "path {path}");

        let html = response.text().await.unwrap();
        assert!(html.contains("data-page=\"not-found\""), "path {path}");
    }
}
