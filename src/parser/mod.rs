//! Parser modules for sif input.
//!
//! An image file is a single block of ASCII digits. Its geometry is not
//! stored in the file; callers supply width and height.
//!
//! # Usage
//!
//! ```ignore
//! use sif::parser::decode;
//!
//! let image = decode("123456789012", 3, 2)?;
//! assert_eq!(image.layer_count(), 2);
//! ```

pub mod decode;

pub use decode::{decode, read_image};
