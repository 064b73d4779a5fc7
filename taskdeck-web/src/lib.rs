//! Taskdeck Web - Task API server and page routing

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Serves the REST resource at `/api/tasks` backed by the file store, and
//! resolves every other path through a static page route table to a
//! server-rendered page shell.

pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;

// Re-export main types
pub use routes::{Page, RouteMatch, RouteTable};
pub use server::{AppState, app, run_server};
