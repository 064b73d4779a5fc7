//! Integration tests for Taskdeck
//!
//! Each test spins up a real API server on an ephemeral port, backed by a
//! task store in a temporary directory, and drives it through the request
//! client exactly the way the CLI and pages do.

#[path = "integration/helpers.rs"]
mod helpers;

#[path = "integration/task_crud.rs"]
mod task_crud;

#[path = "integration/rest_contract.rs"]
mod rest_contract;

#[path = "integration/page_routing.rs"]
mod page_routing;
