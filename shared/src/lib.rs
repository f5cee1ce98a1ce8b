//! Shared types for the storefront admin console
//!
//! Entity models, error codes, and the API response envelope used by both
//! the HTTP client crate and the console view-model crate.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{AppError, ErrorCode};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
