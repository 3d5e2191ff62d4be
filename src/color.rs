//! Pixel values for the tri-color (black/white/chromatic) panel

/// A color on a black/white/chromatic display.
///
/// `Chromatic` renders as red on this panel (other panels of the same family
/// ship a yellow film instead).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TriColor {
    /// Inactive pixel on both planes
    Black,
    /// Active pixel in the black/white plane
    White,
    /// Active pixel in the chromatic plane, overrides the black/white plane
    Chromatic,
}

impl TriColor {
    /// Get the color encoding of the color for one bit in the black/white plane
    pub fn get_bit_value(self) -> u8 {
        match self {
            TriColor::Black => 0u8,
            TriColor::White | TriColor::Chromatic => 1u8,
        }
    }

    /// Gets a full byte of this color for the black/white plane
    pub fn get_byte_value(self) -> u8 {
        match self {
            TriColor::Black => 0x00,
            TriColor::White | TriColor::Chromatic => 0xFF,
        }
    }

    /// Gets a full byte of this color for the caller-side chromatic plane
    ///
    /// A cleared bit marks a chromatic pixel: the driver complements the
    /// chromatic plane on the wire, where the controller wants a set bit
    /// for chromatic.
    pub fn get_chromatic_byte_value(self) -> u8 {
        match self {
            TriColor::Chromatic => 0x00,
            TriColor::Black | TriColor::White => 0xFF,
        }
    }
}

#[cfg(feature = "graphics")]
mod graphics {
    use super::TriColor;
    use embedded_graphics_core::pixelcolor::raw::RawU2;
    use embedded_graphics_core::pixelcolor::{BinaryColor, PixelColor, Rgb888};

    impl PixelColor for TriColor {
        type Raw = RawU2;
    }

    impl From<BinaryColor> for TriColor {
        fn from(color: BinaryColor) -> Self {
            match color {
                BinaryColor::On => TriColor::Black,
                BinaryColor::Off => TriColor::White,
            }
        }
    }

    impl From<TriColor> for Rgb888 {
        fn from(color: TriColor) -> Self {
            match color {
                TriColor::Black => Rgb888::new(0, 0, 0),
                TriColor::White => Rgb888::new(255, 255, 255),
                TriColor::Chromatic => Rgb888::new(255, 0, 0),
            }
        }
    }
}
