//! Core domain types for sif.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Image` - A front-to-back stack of layers
//! - `Layer` - A fixed-size grid of raw digits or semantic pixels
//! - `Pixel` - Black, white or transparent
//! - `Colour` - RGBA colour values

mod colour;
mod image;
mod layer;
mod pixel;

pub use colour::Colour;
pub use image::Image;
pub use layer::Layer;
pub use pixel::Pixel;
