//! Task lifecycle API
//!
//! This module is split into:
//! - types: request payloads
//! - error: error taxonomy and HTTP mapping
//! - engine: TaskEngine with the store operations
//! - handlers: HTTP request handlers

pub mod engine;
pub mod error;
pub mod handlers;
pub mod types;

pub use engine::TaskEngine;
pub use error::TaskError;
pub use handlers::configure_task_routes;
pub use types::CreateTaskRequest;
