use crate::color::TriColor;
use crate::epd7in5b_v2::{DEFAULT_BACKGROUND_COLOR, HEIGHT, NUM_DISPLAY_BYTES, WIDTH};
use crate::graphics::DisplayRotation;
use embedded_graphics_core::prelude::*;

/// Full size buffer for use with the 7in5b EPD
///
/// Holds the black/white plane followed by the chromatic plane. Plane
/// conventions match the driver's caller-side contract: a set bit in the
/// black/white plane is white, a cleared bit in the chromatic plane is red
/// (the driver complements that plane on the wire).
pub struct Display7in5b {
    buffer: [u8; 2 * NUM_DISPLAY_BYTES],
    rotation: DisplayRotation,
}

impl Default for Display7in5b {
    // inline is necessary here to allow heap allocation via Box on stack limited programs
    #[inline(always)]
    fn default() -> Self {
        Display7in5b {
            // 0xFF on both planes is all-white under the caller-side
            // convention
            buffer: [DEFAULT_BACKGROUND_COLOR.get_byte_value(); 2 * NUM_DISPLAY_BYTES],
            rotation: DisplayRotation::default(),
        }
    }
}

impl DrawTarget for Display7in5b {
    type Color = TriColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for pixel in pixels {
            self.set_pixel(pixel);
        }
        Ok(())
    }
}

impl OriginDimensions for Display7in5b {
    fn size(&self) -> Size {
        match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => Size::new(WIDTH, HEIGHT),
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => Size::new(HEIGHT, WIDTH),
        }
    }
}

impl Display7in5b {
    /// get the full two-plane internal buffer
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// get the black/white plane, for
    /// [`update_color_frame`](crate::traits::WaveshareThreeColorDisplay::update_color_frame)
    pub fn bw_buffer(&self) -> &[u8] {
        &self.buffer[..NUM_DISPLAY_BYTES]
    }

    /// get the chromatic plane, for
    /// [`update_color_frame`](crate::traits::WaveshareThreeColorDisplay::update_color_frame)
    pub fn chromatic_buffer(&self) -> &[u8] {
        &self.buffer[NUM_DISPLAY_BYTES..]
    }

    /// Set the display rotation.
    ///
    /// This only concerns future drawing made to it. Anything already drawn
    /// stays as it is in the buffer.
    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// Get current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// Fill both planes with the given color
    pub fn clear_buffer(&mut self, background_color: TriColor) {
        let bw = background_color.get_byte_value();
        let chromatic = background_color.get_chromatic_byte_value();

        self.buffer[..NUM_DISPLAY_BYTES].fill(bw);
        self.buffer[NUM_DISPLAY_BYTES..].fill(chromatic);
    }

    /// Set a specific pixel color on this display
    pub fn set_pixel(&mut self, pixel: Pixel<TriColor>) {
        let Pixel(point, color) = pixel;

        // final coordinates
        let (x, y) = match self.rotation {
            DisplayRotation::Rotate0 => (point.x, point.y),
            DisplayRotation::Rotate90 => (WIDTH as i32 - 1 - point.y, point.x),
            DisplayRotation::Rotate180 => {
                (WIDTH as i32 - 1 - point.x, HEIGHT as i32 - 1 - point.y)
            }
            DisplayRotation::Rotate270 => (point.y, HEIGHT as i32 - 1 - point.x),
        };

        // Out of range check
        if (x < 0) || (x >= WIDTH as i32) || (y < 0) || (y >= HEIGHT as i32) {
            return;
        }

        let index = x as usize / 8 + y as usize * (WIDTH as usize / 8);
        let bit = 0x80 >> (x as usize % 8);

        match color {
            TriColor::White => {
                self.buffer[index] |= bit;
                self.buffer[NUM_DISPLAY_BYTES + index] |= bit;
            }
            TriColor::Black => {
                self.buffer[index] &= !bit;
                self.buffer[NUM_DISPLAY_BYTES + index] |= bit;
            }
            TriColor::Chromatic => {
                self.buffer[index] |= bit;
                self.buffer[NUM_DISPLAY_BYTES + index] &= !bit;
            }
        }
    }
}
