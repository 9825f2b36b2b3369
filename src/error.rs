use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sif operations
#[derive(Error, Diagnostic, Debug)]
pub enum SifError {
    #[error("Invalid number of characters: {len} is not a multiple of {width}x{height}")]
    #[diagnostic(
        code(sif::decode),
        help("The input must hold a whole number of layers")
    )]
    InvalidLength {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid character {ch:?} at position {index}")]
    #[diagnostic(code(sif::decode), help("Only the digits 0-9 may appear in an image"))]
    InvalidCharacter { ch: char, index: usize },

    #[error("Invalid pixel value {0}")]
    #[diagnostic(
        code(sif::pixel),
        help("Pixels must be 0 (black), 1 (white) or 2 (transparent)")
    )]
    InvalidPixelValue(u8),

    #[error("Image has no layers")]
    #[diagnostic(code(sif::image))]
    EmptyImage,

    #[error("Invalid image dimensions {width}x{height}")]
    #[diagnostic(code(sif::image), help("Width and height must both be at least 1"))]
    InvalidDimensions { width: usize, height: usize },

    #[error("Layer {index} is {actual_width}x{actual_height}, expected {width}x{height}")]
    #[diagnostic(code(sif::image))]
    DimensionMismatch {
        index: usize,
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Output of {width}x{height} scaled by {scale} is too large")]
    #[diagnostic(code(sif::render), help("Use a smaller --scale"))]
    OutputTooLarge {
        width: usize,
        height: usize,
        scale: u32,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sif::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(sif::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(sif::encode))]
    Encode { message: String },
}

pub type Result<T> = std::result::Result<T, SifError>;
