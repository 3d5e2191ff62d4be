use crate::traits::{BusyWait, Command};
use core::marker::PhantomData;
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
    spi::SpiDevice,
};

/// The Connection Interface of all (?) Waveshare EPD-Devices
///
/// SINGLE_BYTE_WRITE defines if a data block is written bytewise
/// or blockwise to the spi device
pub(crate) struct DisplayInterface<SPI, BUSY, DC, RST, DELAY, const SINGLE_BYTE_WRITE: bool> {
    /// SPI
    _spi: PhantomData<SPI>,
    /// DELAY
    _delay: PhantomData<DELAY>,
    /// Low for busy, Wait until display is ready!
    busy: BUSY,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Resetting
    rst: RST,
    /// number of us the busy poll loop should sleep on
    delay_us: u32,
}

impl<SPI, BUSY, DC, RST, DELAY, const SINGLE_BYTE_WRITE: bool>
    DisplayInterface<SPI, BUSY, DC, RST, DELAY, SINGLE_BYTE_WRITE>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Creates a new `DisplayInterface` struct
    ///
    /// If no delay is given, a default delay of 10ms is used.
    pub fn new(busy: BUSY, dc: DC, rst: RST, delay_us: Option<u32>) -> Self {
        // default delay of 10ms
        let delay_us = delay_us.unwrap_or(10_000);
        DisplayInterface {
            _spi: PhantomData,
            _delay: PhantomData,
            busy,
            dc,
            rst,
            delay_us,
        }
    }

    /// Basic function for sending [Commands](Command).
    ///
    /// Enables direct interaction with the device with the help of [data()](DisplayInterface::data())
    pub(crate) fn cmd<T: Command>(&mut self, spi: &mut SPI, command: T) -> Result<(), SPI::Error> {
        // low for commands
        let _ = self.dc.set_low();

        // Transfer the command over spi
        self.write(spi, &[command.address()])
    }

    /// Basic function for sending an array of u8-values of data over spi
    ///
    /// Enables direct interaction with the device with the help of [cmd()](DisplayInterface::cmd())
    pub(crate) fn data(&mut self, spi: &mut SPI, data: &[u8]) -> Result<(), SPI::Error> {
        // high for data
        let _ = self.dc.set_high();

        if SINGLE_BYTE_WRITE {
            for val in data.iter().copied() {
                // Transfer data one u8 at a time over spi
                self.write(spi, &[val])?;
            }
        } else {
            self.write(spi, data)?;
        }

        Ok(())
    }

    /// Same as [data()](DisplayInterface::data()) but sends the complement
    /// of every byte.
    ///
    /// The chromatic plane of this controller wants its polarity flipped
    /// relative to the caller-side buffer convention.
    pub(crate) fn data_inverted(&mut self, spi: &mut SPI, data: &[u8]) -> Result<(), SPI::Error> {
        // high for data
        let _ = self.dc.set_high();

        for val in data.iter().copied() {
            self.write(spi, &[!val])?;
        }

        Ok(())
    }

    /// Basic function for sending [Commands](Command) and the data belonging to it.
    pub(crate) fn cmd_with_data<T: Command>(
        &mut self,
        spi: &mut SPI,
        command: T,
        data: &[u8],
    ) -> Result<(), SPI::Error> {
        self.cmd(spi, command)?;
        self.data(spi, data)
    }

    /// Basic function for sending the same byte of data (one u8) multiple times over spi
    ///
    /// Used by the solid-fill operations.
    pub(crate) fn data_x_times(
        &mut self,
        spi: &mut SPI,
        val: u8,
        repetitions: u32,
    ) -> Result<(), SPI::Error> {
        // high for data
        let _ = self.dc.set_high();
        // Transfer data (u8) over spi
        for _ in 0..repetitions {
            self.write(spi, &[val])?;
        }
        Ok(())
    }

    // spi write helper/abstraction function
    fn write(&mut self, spi: &mut SPI, data: &[u8]) -> Result<(), SPI::Error> {
        // transfer spi data
        // Be careful!! Linux has a default limit of 4096 bytes per spi transfer
        // see https://raspberrypi.stackexchange.com/questions/65595/spi-transfer-fails-with-buffer-size-greater-than-4096
        if cfg!(target_os = "linux") {
            for data_chunk in data.chunks(4096) {
                spi.write(data_chunk)?;
            }
            Ok(())
        } else {
            spi.write(data)
        }
    }

    /// Waits with a bounded poll budget until the device isn't busy anymore
    ///
    /// Polls the BUSY input every `delay_us` (10ms by default), at most
    /// `max_polls` times. The controller asserts busy across power-on,
    /// refresh and power-off; a miswired or faulty unit would otherwise
    /// hang the caller forever.
    ///
    /// is_busy_low
    ///
    ///  - TRUE for this controller family (UC8159/UC8179 style)
    ///  - FALSE for the SSD16xx style controllers
    pub(crate) fn wait_until_idle(
        &mut self,
        delay: &mut DELAY,
        is_busy_low: bool,
        max_polls: u32,
    ) -> BusyWait {
        for _ in 0..max_polls {
            if !self.is_busy(is_busy_low) {
                return BusyWait::Ready;
            }
            delay.delay_us(self.delay_us);
        }
        BusyWait::TimedOut
    }

    /// Waits, unbounded, until the device reports busy
    ///
    /// Counterpart of [wait_until_idle()](DisplayInterface::wait_until_idle):
    /// it returns once the BUSY line reaches the busy level. No internal
    /// sequence uses it; it is kept as an available synchronization
    /// primitive.
    pub(crate) fn wait_until_busy(&mut self, delay: &mut DELAY, is_busy_low: bool) {
        while !self.is_busy(is_busy_low) {
            delay.delay_us(self.delay_us);
        }
    }

    /// Checks if device is still busy
    ///
    /// This is normally handled by the more complicated commands themselves,
    /// but in the case you send data and commands directly you might need to check
    /// if the device is still busy
    pub(crate) fn is_busy(&mut self, is_busy_low: bool) -> bool {
        (is_busy_low && self.busy.is_low().unwrap_or(false))
            || (!is_busy_low && self.busy.is_high().unwrap_or(false))
    }

    /// Resets the device.
    ///
    /// Often used to awake the module from deep sleep.
    ///
    /// The timing of keeping the reset pin low is different per device; the
    /// trailing 200ms hold matches the upstream vendor drivers.
    pub(crate) fn reset(&mut self, delay: &mut DELAY, initial_delay: u32, duration: u32) {
        let _ = self.rst.set_high();
        delay.delay_us(initial_delay);

        let _ = self.rst.set_low();
        delay.delay_us(duration);

        let _ = self.rst.set_high();
        delay.delay_us(200_000);
    }
}
