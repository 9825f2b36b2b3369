//! PNG output for flattened layers.
//!
//! Converts a layer to an RGBA image with optional integer scaling, and
//! reads raster images back into layers.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{Result, SifError};
use crate::types::{Colour, Layer, Pixel};

/// Largest RGBA buffer we will allocate, matching the `image` crate's
/// default decoder allocation limit (512 MiB).
const MAX_OUTPUT_BYTES: usize = 512 * 1024 * 1024;

/// Build an RGBA buffer for a layer.
///
/// `scale` is an integer upscaling factor (0 is treated as 1). Fails with
/// `OutputTooLarge` when the scaled image does not fit a raster buffer.
pub fn to_rgba_image(layer: &Layer<Pixel>, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let (width, height) = scaled_size(layer, scale)?;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    // Every coordinate below is < width or height, which fit in u32.
    for (y, row) in layer.rows().iter().enumerate() {
        for (x, pixel) in row.iter().enumerate() {
            let rgba = Rgba(pixel.to_colour().to_rgba());

            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgba);
                }
            }
        }
    }

    Ok(img)
}

/// Scaled output dimensions, checked against the u32 raster limits and
/// `MAX_OUTPUT_BYTES`.
fn scaled_size(layer: &Layer<Pixel>, scale: u32) -> Result<(u32, u32)> {
    let too_large = || SifError::OutputTooLarge {
        width: layer.width(),
        height: layer.height(),
        scale,
    };

    let width = u32::try_from(layer.width())
        .ok()
        .and_then(|w| w.checked_mul(scale))
        .ok_or_else(too_large)?;
    let height = u32::try_from(layer.height())
        .ok()
        .and_then(|h| h.checked_mul(scale))
        .ok_or_else(too_large)?;

    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .filter(|&bytes| bytes <= MAX_OUTPUT_BYTES)
        .ok_or_else(too_large)?;

    Ok((width, height))
}

/// Write a flattened layer to a PNG file.
///
/// Returns the dimensions of the written image.
///
/// # Arguments
///
/// * `layer` - The layer to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(layer: &Layer<Pixel>, path: &Path, scale: u32) -> Result<(u32, u32)> {
    let img = to_rgba_image(layer, scale)?;

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| SifError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(img.dimensions())
}

/// Read a raster image into a layer, classifying each colour.
pub fn read_png(path: &Path) -> Result<Layer<Pixel>> {
    let img = image::open(path)
        .map_err(|e| SifError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read image: {}", e),
        })?
        .to_rgba8();

    let rows = img
        .rows()
        .map(|row| row.map(|p| Pixel::from_colour(Colour::from(p.0))).collect())
        .collect();

    Ok(Layer::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::types::Pixel::{Black as B, Transparent as T, White as W};

    #[test]
    fn test_write_png_simple() {
        let layer = Layer::new(vec![vec![B, W], vec![W, T]]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("image.png");

        write_png(&layer, &path, 1).unwrap();

        assert!(path.exists());

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_write_png_scaled() {
        let layer = Layer::new(vec![vec![W, B]]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        assert_eq!(write_png(&layer, &path, 2).unwrap(), (4, 2));

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);

        assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(3, 1).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_write_png_scale_zero_treated_as_one() {
        let layer = Layer::new(vec![vec![B]]);
        let img = to_rgba_image(&layer, 0).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
    }

    #[test]
    fn test_to_rgba_image_scale_overflow() {
        let layer = Layer::new(vec![vec![B; 25]; 6]);

        let err = to_rgba_image(&layer, 1 << 28).unwrap_err();
        assert!(matches!(
            err,
            SifError::OutputTooLarge {
                width: 25,
                height: 6,
                ..
            }
        ));
        assert!(to_rgba_image(&layer, u32::MAX).is_err());
    }

    #[test]
    fn test_to_rgba_image_rejects_oversized_buffer() {
        // 2.5e9 x 6e8 fits u32 per side but not in memory.
        let layer = Layer::new(vec![vec![B; 25]; 6]);
        assert!(matches!(
            to_rgba_image(&layer, 100_000_000),
            Err(SifError::OutputTooLarge { .. })
        ));

        // 25x6 at scale 100 is 2500x600, well within the limit.
        assert_eq!(to_rgba_image(&layer, 100).unwrap().dimensions(), (2500, 600));
    }

    #[test]
    fn test_write_png_too_large_leaves_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.png");

        let layer = Layer::new(vec![vec![W; 25]; 6]);
        let err = write_png(&layer, &path, 300_000_000).unwrap_err();

        assert!(matches!(err, SifError::OutputTooLarge { scale: 300_000_000, .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_png_round_trip() {
        let layer = Layer::new(vec![vec![B, W, T], vec![T, T, W]]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("round.png");

        write_png(&layer, &path, 1).unwrap();
        assert_eq!(read_png(&path).unwrap(), layer);
    }

    #[test]
    fn test_read_png_classifies_colours() {
        let mut img: RgbaImage = ImageBuffer::new(3, 1);
        img.put_pixel(0, 0, Rgba([200, 10, 10, 255]));
        img.put_pixel(1, 0, Rgba([200, 200, 200, 200]));
        img.put_pixel(2, 0, Rgba([255, 255, 255, 40]));

        let dir = tempdir().unwrap();
        let path = dir.path().join("colours.png");
        img.save(&path).unwrap();

        assert_eq!(read_png(&path).unwrap().rows(), &[vec![B, W, T]]);
    }

    #[test]
    fn test_write_png_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("image.png");

        let err = write_png(&Layer::new(vec![vec![B]]), &path, 1).unwrap_err();
        assert!(matches!(err, SifError::Io { .. }));
    }
}
