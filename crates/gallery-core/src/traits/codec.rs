//! Raster codec trait.

use bytes::Bytes;

use crate::result::AppResult;
use crate::types::geometry::Size;

/// Decodes, resizes, and re-encodes raster images.
///
/// The thumbnail orchestrator receives its codec as a constructor
/// parameter; tests substitute instrumented implementations to observe
/// cache behavior.
pub trait ImageCodec: Send + Sync + std::fmt::Debug + 'static {
    /// Render a thumbnail from encoded source bytes.
    ///
    /// With `crop` set, a square region sized to the smaller source
    /// dimension is cut symmetrically about the center before scaling.
    /// The result always fits within `size`, preserving aspect ratio.
    /// Undecodable input yields a `Decode` error.
    fn render(&self, source: &[u8], size: Size, crop: bool) -> AppResult<Bytes>;

    /// Read the intrinsic pixel dimensions of encoded image bytes without
    /// a full decode.
    fn dimensions(&self, source: &[u8]) -> AppResult<Size>;
}
