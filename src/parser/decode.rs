//! Digit stream decoding.
//!
//! Partitions a flat string of digits into `width * height` layers, each
//! split into `height` rows of `width` digits, preserving order.

use std::fs;
use std::path::Path;

use crate::error::{Result, SifError};
use crate::types::{Image, Layer};

/// Decode a digit string into a layered image.
///
/// The length check runs before any character is inspected. Digits are
/// kept raw; checking them against the pixel domain is left to the
/// consumers that need semantic values.
pub fn decode(input: &str, width: usize, height: usize) -> Result<Image> {
    if width == 0 || height == 0 {
        return Err(SifError::InvalidDimensions { width, height });
    }

    let size = width
        .checked_mul(height)
        .ok_or(SifError::InvalidDimensions { width, height })?;
    let chars: Vec<char> = input.chars().collect();

    if chars.len() % size != 0 {
        return Err(SifError::InvalidLength {
            len: chars.len(),
            width,
            height,
        });
    }

    let layers = chars
        .chunks(size)
        .enumerate()
        .map(|(i, chunk)| decode_layer(chunk, width, i * size))
        .collect::<Result<Vec<_>>>()?;

    Ok(Image::from_parts(width, height, layers))
}

fn decode_layer(chars: &[char], width: usize, offset: usize) -> Result<Layer> {
    let rows = chars
        .chunks(width)
        .enumerate()
        .map(|(i, chunk)| decode_row(chunk, offset + i * width))
        .collect::<Result<Vec<_>>>()?;

    Ok(Layer::new(rows))
}

fn decode_row(chars: &[char], offset: usize) -> Result<Vec<u8>> {
    chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            ch.to_digit(10)
                .map(|d| d as u8)
                .ok_or(SifError::InvalidCharacter {
                    ch,
                    index: offset + i,
                })
        })
        .collect()
}

/// Read and decode an image file.
///
/// Trailing whitespace (such as the final newline) is ignored.
pub fn read_image(path: &Path, width: usize, height: usize) -> Result<Image> {
    let source = fs::read_to_string(path).map_err(|e| SifError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    decode(source.trim_end(), width, height)
}
