//! # gallery-api
//!
//! HTTP surface for Lumen Gallery: the JSON browsing API, the binary
//! thumbnail endpoint, router assembly, and the mapping from [`AppError`]
//! to HTTP responses.
//!
//! [`AppError`]: gallery_core::AppError

pub mod app;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use state::AppState;
