//! 2D pixel geometry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// An immutable (width, height) pair of positive pixel dimensions.
///
/// Depending on context this is either a maximum bounding box (uncropped
/// thumbnails) or an exact target box (cropped thumbnails). Ordering is by
/// (width, height), which gives format lists their canonical sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels. Always >= 1.
    pub width: u32,
    /// Height in pixels. Always >= 1.
    pub height: u32,
}

impl Size {
    /// Create a size from two positive dimensions.
    ///
    /// Non-positive dimensions are a contract violation; callers are
    /// expected to validate input through the size-token decoder before
    /// constructing a `Size`.
    pub fn new(width: u32, height: u32) -> AppResult<Self> {
        if width < 1 || height < 1 {
            return Err(AppError::validation(format!(
                "Size dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// The smaller of the two dimensions.
    pub fn min_dimension(&self) -> u32 {
        self.width.min(self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(Size::new(0, 10).is_err());
        assert!(Size::new(10, 0).is_err());
        assert!(Size::new(0, 0).is_err());
        assert!(Size::new(1, 1).is_ok());
    }

    #[test]
    fn test_ordering_by_width_then_height() {
        let a = Size::new(100, 200).unwrap();
        let b = Size::new(100, 300).unwrap();
        let c = Size::new(200, 100).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_display() {
        assert_eq!(Size::new(400, 300).unwrap().to_string(), "400x300");
    }
}
