//! sif - Space image format decoder
//!
//! A library for decoding flat digit streams into stacks of fixed-size
//! layers, checksumming them, and flattening the stack into a single
//! visible image.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use analysis::{checksum, checksum_raw, count_digits, count_pixels, Checksum, PixelCounts};
pub use error::{Result, SifError};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use parser::{decode, read_image};
pub use render::{flatten, read_png, render_text, to_rgba_image, write_png};
pub use types::{Colour, Image, Layer, Pixel};
