//! HTTP request handlers.

pub mod gallery;
pub mod health;
pub mod thumbnail;
