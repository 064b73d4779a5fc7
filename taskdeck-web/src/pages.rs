//! Server-rendered page shells.
//!
//! Every non-API path resolves through the page route table and lands on one
//! of these minimal shells. The shells carry no task data themselves; the
//! pages load whatever they need through the JSON API.

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use tracing::debug;

use crate::routes::{Page, RouteMatch};
use crate::server::AppState;

/// Resolves non-API paths through the page route table and renders the
/// matched shell. Unmatched paths render the not-found shell with a 404.
pub async fn page_fallback(
    State(state): State<AppState>,
    uri: Uri,
) -> (StatusCode, Html<String>) {
    let matched = state.routes.resolve(uri.path());
    debug!(page = matched.page.name(), path = uri.path(), "resolved page");

    let status = if matched.page == Page::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, render(&matched))
}

/// Renders the shell for a resolved route.
pub fn render(matched: &RouteMatch) -> Html<String> {
    let body = match matched.page {
        Page::Home => home_body(),
        Page::Tasks => tasks_body(),
        Page::TaskNew => task_new_body(),
        Page::TaskEdit => task_edit_body(matched.param("id").unwrap_or_default()),
        Page::NotFound => not_found_body(),
    };

    Html(layout(matched.page.name(), &body))
}

fn layout(name: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Taskdeck</title>
</head>
<body data-page="{name}">
  <nav>
    <a href="/">Home</a>
    <a href="/tasks">Tasks</a>
    <a href="/tasks/new">New task</a>
  </nav>
  <main>
{body}
  </main>
</body>
</html>
"#
    )
}

fn home_body() -> String {
    "    <h1>Taskdeck</h1>\n    <p>A small task manager. Head over to <a href=\"/tasks\">your tasks</a>.</p>".to_string()
}

fn tasks_body() -> String {
    "    <h1>Tasks</h1>\n    <ul id=\"task-list\" data-source=\"/api/tasks\"></ul>".to_string()
}

fn task_new_body() -> String {
    "    <h1>New task</h1>\n    <form id=\"task-form\" data-action=\"/api/tasks\" data-method=\"POST\"></form>".to_string()
}

fn task_edit_body(id: &str) -> String {
    format!(
        "    <h1>Edit task {id}</h1>\n    <form id=\"task-form\" data-action=\"/api/tasks/{id}\" data-method=\"PUT\"></form>"
    )
}

fn not_found_body() -> String {
    "    <h1>Page not found</h1>\n    <p>Nothing lives at this address. Try <a href=\"/tasks\">the task list</a>.</p>".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteTable;

    #[test]
    fn test_edit_shell_embeds_the_bound_id() {
        let table = RouteTable::new();
        let Html(html) = render(&table.resolve("/tasks/42/edit"));

        assert!(html.contains("Edit task 42"));
        assert!(html.contains("/api/tasks/42"));
    }

    #[test]
    fn test_shells_carry_the_route_name() {
        let table = RouteTable::new();

        let Html(html) = render(&table.resolve("/tasks"));
        assert!(html.contains("data-page=\"tasks\""));

        let Html(html) = render(&table.resolve("/definitely/not/here"));
        assert!(html.contains("data-page=\"not-found\""));
    }
}
