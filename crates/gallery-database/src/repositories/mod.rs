//! Per-entity repositories over the PostgreSQL pool.

pub mod category;
pub mod format;
pub mod image;

pub use category::CategoryRepository;
pub use format::FormatRepository;
pub use image::ImageRepository;
