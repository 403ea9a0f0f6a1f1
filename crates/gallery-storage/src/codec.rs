//! Raster codec built on the `image` crate.

use std::io::Cursor;

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageReader};

use gallery_core::error::{AppError, ErrorKind};
use gallery_core::result::AppResult;
use gallery_core::traits::codec::ImageCodec;
use gallery_core::types::Size;

/// Default JPEG quality for generated thumbnails.
pub const DEFAULT_JPEG_QUALITY: u8 = 86;

/// [`ImageCodec`] implementation decoding any raster format the `image`
/// crate knows and always encoding JPEG output.
#[derive(Debug, Clone)]
pub struct RasterCodec {
    /// JPEG encoding quality (1-100).
    jpeg_quality: u8,
}

impl RasterCodec {
    /// Create a codec with the given JPEG quality.
    pub fn new(jpeg_quality: u8) -> Self {
        Self { jpeg_quality }
    }
}

impl Default for RasterCodec {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY)
    }
}

impl ImageCodec for RasterCodec {
    fn render(&self, source: &[u8], size: Size, crop: bool) -> AppResult<Bytes> {
        let img = decode(source)?;
        let img = if crop { center_square(img) } else { img };

        // Shrink-to-fit only; sources already inside the box stay as-is.
        let (width, height) = img.dimensions();
        let thumb = if width > size.width || height > size.height {
            img.thumbnail(size.width, size.height)
        } else {
            img
        };

        let mut buf = Vec::new();
        let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut buf), self.jpeg_quality);
        thumb.to_rgb8().write_with_encoder(encoder).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to encode thumbnail", e)
        })?;

        Ok(Bytes::from(buf))
    }

    fn dimensions(&self, source: &[u8]) -> AppResult<Size> {
        let (width, height) = ImageReader::new(Cursor::new(source))
            .with_guessed_format()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Decode, "Failed to probe image format", e)
            })?
            .into_dimensions()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Decode, "Failed to read image dimensions", e)
            })?;
        Size::new(width, height)
    }
}

fn decode(source: &[u8]) -> AppResult<DynamicImage> {
    ImageReader::new(Cursor::new(source))
        .with_guessed_format()
        .map_err(|e| AppError::with_source(ErrorKind::Decode, "Failed to probe image format", e))?
        .decode()
        .map_err(|e| AppError::with_source(ErrorKind::Decode, "Failed to decode image", e))
}

/// Cut the square sized to the smaller dimension, symmetric about the
/// center; pixels outside it are discarded.
fn center_square(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    let side = width.min(height);
    if side == width && side == height {
        return img;
    }
    let x = (width - side) / 2;
    let y = (height - side) / 2;
    img.crop_imm(x, y, side, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_of(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 251) as u8, (y % 241) as u8, 7])
        });
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn decoded_dimensions(data: &[u8]) -> (u32, u32) {
        image::load_from_memory(data).unwrap().dimensions()
    }

    #[test]
    fn test_crop_yields_exact_square_box() {
        let codec = RasterCodec::default();
        let source = png_of(800, 600);

        let out = codec
            .render(&source, Size::new(200, 200).unwrap(), true)
            .unwrap();
        assert_eq!(decoded_dimensions(&out), (200, 200));
    }

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        let codec = RasterCodec::default();
        let source = png_of(800, 600);

        let out = codec
            .render(&source, Size::new(200, 200).unwrap(), false)
            .unwrap();
        assert_eq!(decoded_dimensions(&out), (200, 150));
    }

    #[test]
    fn test_portrait_fit() {
        let codec = RasterCodec::default();
        let source = png_of(600, 800);

        let out = codec
            .render(&source, Size::new(200, 200).unwrap(), false)
            .unwrap();
        assert_eq!(decoded_dimensions(&out), (150, 200));
    }

    #[test]
    fn test_small_source_is_not_upscaled() {
        let codec = RasterCodec::default();
        let source = png_of(100, 80);

        let out = codec
            .render(&source, Size::new(400, 400).unwrap(), false)
            .unwrap();
        assert_eq!(decoded_dimensions(&out), (100, 80));
    }

    #[test]
    fn test_dimensions_probe() {
        let codec = RasterCodec::default();
        let source = png_of(321, 123);

        let size = codec.dimensions(&source).unwrap();
        assert_eq!((size.width, size.height), (321, 123));
    }

    #[test]
    fn test_garbage_input_is_decode_error() {
        let codec = RasterCodec::default();

        let err = codec
            .render(b"not an image", Size::new(10, 10).unwrap(), false)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decode);

        let err = codec.dimensions(b"not an image").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Decode);
    }
}
