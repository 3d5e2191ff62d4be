use embedded_hal::{delay::DelayNs, digital::InputPin, digital::OutputPin, spi::SpiDevice};

/// All commands need to have this trait which gives the address of the command
/// which needs to be send via SPI with activated CommandsPin (Data/Command Pin in CommandMode)
pub(crate) trait Command: Copy {
    fn address(self) -> u8;
}

/// Outcome of a bounded wait on the BUSY line.
///
/// The controller offers no completion signal other than the BUSY level, so
/// power-on, refresh and power-off waits poll it with a fixed budget. The
/// vendor sequencing proceeds past an exhausted budget; callers that want to
/// notice a stuck panel can check for [`BusyWait::TimedOut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyWait {
    /// The controller released the BUSY line within the poll budget
    Ready,
    /// The poll budget ran out with the BUSY line still asserted
    TimedOut,
}

pub(crate) trait InternalWiAdditions<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// This initialises the EPD and powers it up
    ///
    /// This function is already called from
    ///  - [new()](WaveshareDisplay::new())
    ///  - [`wake_up`](WaveshareDisplay::wake_up())
    ///
    /// This function performs a hardware reset first,
    /// so you don't need to reset your self when trying to wake your device up
    /// after setting it to sleep.
    fn init(&mut self, spi: &mut SPI, delay: &mut DELAY) -> Result<(), SPI::Error>;
}

/// Functions to interact with three color panels
pub trait WaveshareThreeColorDisplay<SPI, BUSY, DC, RST, DELAY>:
    WaveshareDisplay<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Transmit data to the SRAM of the EPD
    ///
    /// Updates both the black and the secondary color layers. Does not
    /// trigger a refresh; finish with
    /// [`display_frame`](WaveshareDisplay::display_frame).
    fn update_color_frame(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
        black: &[u8],
        chromatic: &[u8],
    ) -> Result<(), SPI::Error>;

    /// Update only the black/white data of the display.
    ///
    /// This must be finished by calling `update_chromatic_frame`.
    fn update_achromatic_frame(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
        black: &[u8],
    ) -> Result<(), SPI::Error>;

    /// Update only the chromatic data of the display.
    ///
    /// This should be preceded by a call to `update_achromatic_frame`.
    /// This data takes precedence over the black/white data.
    fn update_chromatic_frame(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
        chromatic: &[u8],
    ) -> Result<(), SPI::Error>;
}

/// All the functions to interact with the EPDs
///
/// This trait includes all public functions to use the EPD
///
/// # Example
///
///```ignore
///use embedded_graphics::{
///    pixelcolor::BinaryColor::On as Black, prelude::*, primitives::{Line, PrimitiveStyle},
///};
///use epd7in5b_v2::{epd7in5b_v2::*, prelude::*};
///
///// Setup EPD
///let mut epd = Epd7in5b::new(&mut spi, busy_in, dc, rst, &mut delay, None)?;
///
///// Use display graphics from embedded-graphics
///let mut display = Display7in5b::default();
///
///// Use embedded graphics for drawing a line
///
///let _ = Line::new(Point::new(0, 120), Point::new(0, 295))
///    .into_styled(PrimitiveStyle::with_stroke(TriColor::Black, 1))
///    .draw(&mut display);
///
///// Display updated frame
///epd.update_color_frame(&mut spi, &mut delay, display.bw_buffer(), display.chromatic_buffer())?;
///epd.display_frame(&mut spi, &mut delay)?;
///
///// Set the EPD to sleep
///epd.sleep(&mut spi, &mut delay)?;
///```
pub trait WaveshareDisplay<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// The Color Type used by the Display
    type DisplayColor;

    /// Creates a new driver from a SPI peripheral, Busy InputPin, DC
    /// OutputPin and RST OutputPin
    ///
    /// `delay_us` is the number of us the busy poll loop should sleep on.
    /// Setting it to None means a default value is used.
    ///
    /// This already initialises the device.
    fn new(
        spi: &mut SPI,
        busy: BUSY,
        dc: DC,
        rst: RST,
        delay: &mut DELAY,
        delay_us: Option<u32>,
    ) -> Result<Self, SPI::Error>
    where
        Self: Sized;

    /// Let the device enter deep-sleep mode to save power.
    ///
    /// The deep sleep mode returns to standby with a hardware reset,
    /// i.e. a call to [`wake_up`](WaveshareDisplay::wake_up). No other
    /// operation is valid on a sleeping device.
    fn sleep(&mut self, spi: &mut SPI, delay: &mut DELAY) -> Result<(), SPI::Error>;

    /// Wakes the device up from sleep
    ///
    /// Also reinitialises the device, replaying the init variant the
    /// driver was constructed with.
    fn wake_up(&mut self, spi: &mut SPI, delay: &mut DELAY) -> Result<(), SPI::Error>;

    /// Sets the backgroundcolor for various commands like [clear_frame](WaveshareDisplay::clear_frame)
    fn set_background_color(&mut self, color: Self::DisplayColor);

    /// Get current background color
    fn background_color(&self) -> &Self::DisplayColor;

    /// Get the width of the display
    fn width(&self) -> u32;

    /// Get the height of the display
    fn height(&self) -> u32;

    /// Transmit a full black/white frame to the SRAM of the EPD,
    /// clearing the chromatic plane
    fn update_frame(
        &mut self,
        spi: &mut SPI,
        buffer: &[u8],
        delay: &mut DELAY,
    ) -> Result<(), SPI::Error>;

    /// Displays the frame data from SRAM
    ///
    /// This is the only trigger that makes the panel physically redraw;
    /// it waits (bounded) until the device isn't busy anymore
    fn display_frame(&mut self, spi: &mut SPI, delay: &mut DELAY) -> Result<(), SPI::Error>;

    /// Provide a combined update&display and save some time (skipping a busy check in between)
    fn update_and_display_frame(
        &mut self,
        spi: &mut SPI,
        buffer: &[u8],
        delay: &mut DELAY,
    ) -> Result<(), SPI::Error>;

    /// Clears the frame buffer on the EPD with the declared background color
    /// and refreshes the panel
    ///
    /// The background color can be changed with [`WaveshareDisplay::set_background_color`]
    fn clear_frame(&mut self, spi: &mut SPI, delay: &mut DELAY) -> Result<(), SPI::Error>;

    /// Wait until the display has stopped processing data, with a bounded
    /// poll budget
    ///
    /// You can call this to make sure a frame is displayed before going
    /// further. Returns how the wait ended; the device is free to be used
    /// again either way, matching the vendor sequencing.
    fn wait_until_idle(&mut self, spi: &mut SPI, delay: &mut DELAY)
        -> Result<BusyWait, SPI::Error>;

    /// Checks if the display is busy right now
    fn is_busy(&mut self) -> bool;
}
