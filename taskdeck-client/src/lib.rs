//! Taskdeck Client - HTTP request wrappers for the task API

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Thin client-side layer over the remote task collection: one configured
//! HTTP client and the five operations the API exposes. No caching, no
//! retries, no validation; the decoded response body is the whole result.

pub mod client;
pub mod errors;

// Re-export main types
pub use client::TaskApi;
pub use errors::ApiError;

/// Convenience type alias for Results with ApiError.
pub type Result<T> = std::result::Result<T, ApiError>;
