//! A front-to-back stack of layers.

use crate::error::{Result, SifError};

use super::Layer;

/// A layered image. Layer 0 is the frontmost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    layers: Vec<Layer>,
    width: usize,
    height: usize,
}

impl Image {
    /// Create an image from layers, checking that every layer is
    /// `width` x `height`.
    pub fn from_layers(width: usize, height: usize, layers: Vec<Layer>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SifError::InvalidDimensions { width, height });
        }

        for (index, layer) in layers.iter().enumerate() {
            if layer.size() != (width, height) || !layer.is_rectangular() {
                return Err(SifError::DimensionMismatch {
                    index,
                    width,
                    height,
                    actual_width: layer.width(),
                    actual_height: layer.height(),
                });
            }
        }

        Ok(Self {
            layers,
            width,
            height,
        })
    }

    /// Assemble an image whose layers are already known to fit.
    pub(crate) fn from_parts(width: usize, height: usize, layers: Vec<Layer>) -> Self {
        Self {
            layers,
            width,
            height,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Serialize back to the digit stream, layer-major then row-major.
    pub fn to_digits(&self) -> String {
        self.layers
            .iter()
            .flat_map(|layer| layer.pixels())
            .map(|d| char::from(b'0' + d))
            .collect()
    }
}
