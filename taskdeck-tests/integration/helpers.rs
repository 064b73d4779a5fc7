//! Shared fixtures: an API server on an ephemeral port plus a client
//! pointed at it.

use std::net::SocketAddr;

use taskdeck_client::TaskApi;
use taskdeck_core::config::{ApiBase, ApiConfig};
use taskdeck_core::{TaskDraft, TaskStore};
use taskdeck_web::{AppState, app};
use tempfile::TempDir;

/// A running task server over a temporary data file.
///
/// The server task is aborted when the fixture is dropped; the temp dir
/// keeps the data file alive for the duration of the test.
pub struct TestServer {
    pub addr: SocketAddr,
    _data_dir: TempDir,
    server: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn() -> Self {
        let data_dir = TempDir::new().expect("create temp dir");
        let store = TaskStore::new(data_dir.path().join("tasks.json"));
        let state = AppState::new(store);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        let server = tokio::spawn(async move {
            axum::serve(listener, app(state)).await.expect("serve");
        });

        Self {
            addr,
            _data_dir: data_dir,
            server,
        }
    }

    /// A request client configured against this server.
    pub fn client(&self) -> TaskApi {
        let config = ApiConfig {
            base: ApiBase::resolve(Some(&format!("http://{}", self.addr))),
            ..ApiConfig::default()
        };
        TaskApi::new(config).expect("build client")
    }

    /// Absolute URL on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// A draft with the given title and defaults everywhere else.
pub fn draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        ..TaskDraft::default()
    }
}
