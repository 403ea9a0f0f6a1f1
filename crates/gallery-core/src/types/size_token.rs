//! The canonical size-token grammar: `^\d+x\d+(-c)?$`.
//!
//! Tokens appear in thumbnail URLs and artifact paths and must stay
//! bit-exact for compatibility. Parsing here is the single validation gate
//! protecting the raster codec from degenerate sizes.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::geometry::Size;

/// Suffix marking a center-cropped thumbnail, e.g. `400x300-c`.
const CROP_SUFFIX: &str = "-c";

/// A parsed size token: target dimensions plus the crop flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SizeToken {
    /// Target width in pixels. Always >= 1 when parsed.
    pub width: u32,
    /// Target height in pixels. Always >= 1 when parsed.
    pub height: u32,
    /// Whether the thumbnail is center-square-cropped before scaling.
    pub crop: bool,
}

impl SizeToken {
    /// Create a token from already-validated dimensions.
    pub fn new(width: u32, height: u32, crop: bool) -> Self {
        Self {
            width,
            height,
            crop,
        }
    }

    /// The token's dimensions as a [`Size`].
    pub fn size(&self) -> AppResult<Size> {
        Size::new(self.width, self.height)
    }

    /// The (width, height, crop) triple used for permitted-set membership.
    pub fn triple(&self) -> (u32, u32, bool) {
        (self.width, self.height, self.crop)
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)?;
        if self.crop {
            f.write_str(CROP_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for SizeToken {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::validation(format!("Invalid size token: {s:?}"));

        let (body, crop) = match s.strip_suffix(CROP_SUFFIX) {
            Some(body) => (body, true),
            None => (s, false),
        };

        let (w, h) = body.split_once('x').ok_or_else(invalid)?;
        if !is_digits(w) || !is_digits(h) {
            return Err(invalid());
        }

        let width: u32 = w.parse().map_err(|_| invalid())?;
        let height: u32 = h.parse().map_err(|_| invalid())?;
        if width < 1 || height < 1 {
            return Err(invalid());
        }

        Ok(Self {
            width,
            height,
            crop,
        })
    }
}

/// Non-empty and ASCII digits only. Rejects signs, whitespace, and the
/// second `x` of tokens like `10x10x10`.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
