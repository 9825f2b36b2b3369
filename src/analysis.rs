//! Layer checksum.
//!
//! Picks the layer with the fewest black (`0`) pixels and multiplies its
//! white (`1`) and transparent (`2`) counts.

use serde::Serialize;

use crate::error::{Result, SifError};
use crate::types::{Image, Layer, Pixel};

/// Per-value pixel counts for one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PixelCounts {
    pub black: usize,
    pub white: usize,
    pub transparent: usize,
}

impl PixelCounts {
    pub fn get(&self, pixel: Pixel) -> usize {
        match pixel {
            Pixel::Black => self.black,
            Pixel::White => self.white,
            Pixel::Transparent => self.transparent,
        }
    }

    fn add(&mut self, pixel: Pixel) {
        match pixel {
            Pixel::Black => self.black += 1,
            Pixel::White => self.white += 1,
            Pixel::Transparent => self.transparent += 1,
        }
    }
}

/// Result of the checksum pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checksum {
    /// Index of the layer with the fewest black pixels.
    pub layer: usize,
    /// Pixel counts of that layer.
    pub counts: PixelCounts,
    /// `counts.white * counts.transparent`.
    pub value: usize,
}

/// Count the pixels of a layer, failing on the first digit outside the
/// pixel domain.
pub fn count_pixels(layer: &Layer) -> Result<PixelCounts> {
    let mut counts = PixelCounts::default();
    for digit in layer.pixels() {
        counts.add(Pixel::try_from(digit)?);
    }
    Ok(counts)
}

/// Count raw digits `0`, `1` and `2`, ignoring every other digit.
pub fn count_digits(layer: &Layer) -> PixelCounts {
    let mut counts = PixelCounts::default();
    for digit in layer.pixels() {
        if let Ok(pixel) = Pixel::try_from(digit) {
            counts.add(pixel);
        }
    }
    counts
}

/// Compute the image checksum.
///
/// Every layer is counted in order. Ties go to the earliest layer.
pub fn checksum(image: &Image) -> Result<Checksum> {
    let counts = image
        .layers()
        .iter()
        .map(count_pixels)
        .collect::<Result<Vec<_>>>()?;

    select(counts)
}

/// Compute the checksum over raw digits.
///
/// Digits outside `0..=2` are tolerated and simply not counted.
pub fn checksum_raw(image: &Image) -> Result<Checksum> {
    select(image.layers().iter().map(count_digits).collect())
}

fn select(layers: Vec<PixelCounts>) -> Result<Checksum> {
    let mut best: Option<(usize, PixelCounts)> = None;

    for (index, counts) in layers.into_iter().enumerate() {
        if best.map_or(true, |(_, b)| counts.black < b.black) {
            best = Some((index, counts));
        }
    }

    let (layer, counts) = best.ok_or(SifError::EmptyImage)?;

    Ok(Checksum {
        layer,
        counts,
        value: counts.white * counts.transparent,
    })
}
