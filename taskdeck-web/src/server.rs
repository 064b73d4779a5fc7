//! Task API server.
//!
//! Wires the file-backed task store into the axum application: JSON API
//! routes under `/api/tasks`, a page fallback for everything else, and
//! permissive CORS so a frontend served from another origin can talk to the
//! API during development.

use std::io;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use taskdeck_core::TaskStore;
use taskdeck_core::config::TaskdeckConfig;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

use crate::handlers::{create_task, delete_task, get_task, list_tasks, update_task};
use crate::pages::page_fallback;
use crate::routes::RouteTable;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The task store; mutations take the write lock so concurrent
    /// read-modify-write cycles on the data file cannot interleave.
    pub store: Arc<RwLock<TaskStore>>,
    /// Static page route table.
    pub routes: Arc<RouteTable>,
}

impl AppState {
    /// Creates app state around the given store.
    pub fn new(store: TaskStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            routes: Arc::new(RouteTable::new()),
        }
    }
}

/// Builds the axum application with API routes, page fallback, and CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        // JSON API endpoints
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        // Everything else resolves through the page route table
        .fallback(page_fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the task server until the process is stopped.
///
/// # Errors
///
/// - `io::Error` - Failed to bind the listen address or to serve on it
pub async fn run_server(config: TaskdeckConfig) -> io::Result<()> {
    let store = TaskStore::new(config.storage.data_file);
    let state = AppState::new(store);

    tracing::info!(
        "taskdeck server running on http://{}",
        config.server.bind_address
    );
    let listener = tokio::net::TcpListener::bind(config.server.bind_address).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
