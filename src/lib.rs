//! A simple Driver for the Waveshare 7.5" (B) V2 E-Ink Display via SPI
//!
//! This driver was built using [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/~1
//!
//! # Requirements
//!
//! ### SPI
//!
//! - MISO is not connected/available (the controller exposes no readable
//!   registers over this link, only the BUSY pin is observable)
//! - SPI_MODE_0 is used (CPHL = 0, CPOL = 0)
//! - 8 bits per word, MSB first
//! - The controller wants chip-select toggled around every single byte, so
//!   the driver issues one-byte transactions and leaves CS to the
//!   [`SpiDevice`](embedded_hal::spi::SpiDevice) implementation
//!
//! ### Other....
//!
//! - Buffersize: Wherever a bitplane buffer is used it always needs to be of
//!   the size: `width / 8 * height`, one bit per pixel, row-major, MSB first
//!   within each byte. The driver streams buffers as given and performs no
//!   length validation.
//!
//! # Examples
//!
//! ```ignore
//! use epd7in5b_v2::{epd7in5b_v2::Epd7in5b, prelude::*};
//!
//! let mut epd = Epd7in5b::new(&mut spi, busy, dc, rst, &mut delay, None)?;
//!
//! // draw something into the two bitplanes
//!
//! epd.update_and_display_color_frame(&mut spi, &mut delay, &black_plane, &chromatic_plane)?;
//!
//! // wait and look at the image
//!
//! epd.set_background_color(TriColor::White);
//! epd.clear_frame(&mut spi, &mut delay)?;
//!
//! epd.sleep(&mut spi, &mut delay)?;
//! ```
#![no_std]

#[cfg(feature = "graphics")]
pub mod graphics;

mod traits;

pub mod color;

/// Interface for the physical connection between display and the controlling device
mod interface;

pub mod epd7in5b_v2;

pub mod prelude {
    pub use crate::color::TriColor;
    pub use crate::traits::{BusyWait, WaveshareDisplay, WaveshareThreeColorDisplay};
    pub use crate::SPI_MODE;

    #[cfg(feature = "graphics")]
    pub use crate::graphics::DisplayRotation;
}

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode -
/// For more infos see [Requirements: SPI](index.html#spi)
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnFirstTransition,
    polarity: Polarity::IdleLow,
};

/// Computes the needed buffer length. Takes care of rounding up in case
/// width is not divisible by 8.
pub const fn buffer_len(width: usize, height: usize) -> usize {
    (width + 7) / 8 * height
}
