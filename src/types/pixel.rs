//! Semantic pixel values.
//!
//! Decoded images store raw digits. A digit only gains meaning as a
//! [`Pixel`] through [`Pixel::try_from`], which rejects anything outside
//! the three-value domain.

use crate::error::{Result, SifError};

use super::Colour;

/// Alpha and luminance threshold for colour classification (50%).
const HALF: u8 = 0x80;

/// A pixel in the semantic domain.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {
    Black = 0,
    White = 1,
    Transparent = 2,
}

impl Pixel {
    /// All pixel values, in digit order.
    pub const ALL: [Pixel; 3] = [Pixel::Black, Pixel::White, Pixel::Transparent];

    /// The digit this pixel is encoded as.
    pub fn digit(self) -> u8 {
        self as u8
    }

    /// Glyph used by the text preview.
    pub fn glyph(self) -> char {
        match self {
            Pixel::Black => '.',
            Pixel::White => '#',
            Pixel::Transparent => ' ',
        }
    }

    /// Map to an RGBA colour.
    pub fn to_colour(self) -> Colour {
        match self {
            Pixel::Black => Colour::BLACK,
            Pixel::White => Colour::WHITE,
            Pixel::Transparent => Colour::TRANSPARENT,
        }
    }

    /// Classify an arbitrary colour as a pixel.
    ///
    /// Alpha below 50% is transparent; otherwise the unweighted channel
    /// mean decides between black and white.
    pub fn from_colour(colour: Colour) -> Self {
        if colour.a < HALF {
            Pixel::Transparent
        } else if colour.luminance() < HALF {
            Pixel::Black
        } else {
            Pixel::White
        }
    }

    pub fn is_transparent(self) -> bool {
        self == Pixel::Transparent
    }
}

impl TryFrom<u8> for Pixel {
    type Error = SifError;

    fn try_from(digit: u8) -> Result<Self> {
        match digit {
            0 => Ok(Pixel::Black),
            1 => Ok(Pixel::White),
            2 => Ok(Pixel::Transparent),
            other => Err(SifError::InvalidPixelValue(other)),
        }
    }
}

impl From<Pixel> for Colour {
    fn from(pixel: Pixel) -> Self {
        pixel.to_colour()
    }
}

impl From<Colour> for Pixel {
    fn from(colour: Colour) -> Self {
        Pixel::from_colour(colour)
    }
}
