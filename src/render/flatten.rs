//! Layer compositing.

use crate::error::{Result, SifError};
use crate::types::{Image, Layer, Pixel};

/// Flatten an image into a single visible layer.
///
/// Layers are visited front to back; at each coordinate the first
/// non-transparent pixel wins. Coordinates transparent in every layer
/// stay transparent. Digits outside the pixel domain are rejected.
pub fn flatten(image: &Image) -> Result<Layer<Pixel>> {
    if image.is_empty() {
        return Err(SifError::EmptyImage);
    }

    let mut result = Layer::filled(image.width(), image.height(), Pixel::Transparent);

    for layer in image.layers() {
        for (out_row, row) in result.rows_mut().iter_mut().zip(layer.rows()) {
            for (out, &digit) in out_row.iter_mut().zip(row) {
                let pixel = Pixel::try_from(digit)?;
                if out.is_transparent() {
                    *out = pixel;
                }
            }
        }
    }

    Ok(result)
}
