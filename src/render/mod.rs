//! Rendering module for sif.
//!
//! This module flattens layered images and exports the visible result
//! as text or PNG.

mod flatten;
mod png;
mod text;

pub use flatten::flatten;
pub use png::{read_png, to_rgba_image, write_png};
pub use text::render_text;
