//! Image page assembly.

mod service;

pub use service::{FormatLink, ImagePage, ImageService};
