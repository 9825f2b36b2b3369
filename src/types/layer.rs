//! Fixed-size pixel grids.

use crate::error::Result;

use super::Pixel;

/// One full-resolution grid of pixels.
///
/// `Layer<u8>` holds raw decoded digits; `Layer<Pixel>` holds values
/// that have been validated against the semantic domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer<P = u8> {
    /// Pixel grid (row-major: rows[y][x]).
    rows: Vec<Vec<P>>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl<P: Copy> Layer<P> {
    /// Create a layer from its rows.
    ///
    /// Width is taken from the first row. Callers are responsible for
    /// passing rectangular data; [`crate::Image::from_layers`] checks it.
    pub fn new(rows: Vec<Vec<P>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        Self {
            rows,
            width,
            height,
        }
    }

    /// Create a layer with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: P) -> Self {
        Self {
            rows: vec![vec![value; width]; height],
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether every row has exactly `width` pixels.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.width)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<P> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the rows.
    pub fn rows(&self) -> &[Vec<P>] {
        &self.rows
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = P> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<P>] {
        &mut self.rows
    }
}

impl Layer<u8> {
    /// Validate every digit against the semantic pixel domain.
    pub fn to_pixels(&self) -> Result<Layer<Pixel>> {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(|&d| Pixel::try_from(d)).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<Vec<Pixel>>>>()?;

        Ok(Layer {
            rows,
            width: self.width,
            height: self.height,
        })
    }
}

impl From<Layer<Pixel>> for Layer<u8> {
    fn from(layer: Layer<Pixel>) -> Self {
        let rows = layer
            .rows
            .iter()
            .map(|row| row.iter().map(|p| p.digit()).collect())
            .collect();

        Layer {
            rows,
            width: layer.width,
            height: layer.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SifError;

    #[test]
    fn test_new_dimensions() {
        let layer = Layer::new(vec![vec![1u8, 2, 3], vec![4, 5, 6]]);
        assert_eq!(layer.size(), (3, 2));
        assert!(layer.is_rectangular());
        assert_eq!(layer.get(2, 1), Some(6));
        assert_eq!(layer.get(3, 0), None);
    }

    #[test]
    fn test_ragged_rows_detected() {
        let layer = Layer::new(vec![vec![1u8, 2], vec![3]]);
        assert!(!layer.is_rectangular());
    }

    #[test]
    fn test_filled() {
        let layer = Layer::filled(2, 3, Pixel::Transparent);
        assert_eq!(layer.size(), (2, 3));
        assert!(layer.pixels().all(Pixel::is_transparent));
    }

    #[test]
    fn test_pixels_row_major() {
        let layer = Layer::new(vec![vec![1u8, 2], vec![3, 4]]);
        assert_eq!(layer.pixels().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_to_pixels() {
        let layer = Layer::new(vec![vec![0u8, 1], vec![2, 0]]);
        let pixels = layer.to_pixels().unwrap();
        assert_eq!(
            pixels.rows(),
            &[
                vec![Pixel::Black, Pixel::White],
                vec![Pixel::Transparent, Pixel::Black]
            ]
        );
        assert_eq!(Layer::<u8>::from(pixels), layer);
    }

    #[test]
    fn test_to_pixels_rejects_out_of_domain() {
        let layer = Layer::new(vec![vec![0u8, 1], vec![7, 3]]);
        assert!(matches!(
            layer.to_pixels(),
            Err(SifError::InvalidPixelValue(7))
        ));
    }
}
