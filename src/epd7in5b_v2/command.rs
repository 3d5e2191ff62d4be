//! SPI Commands for the Waveshare 7.5" (B) V2 E-Ink Display

use crate::traits;

extern crate bit_field;
use bit_field::BitField;

/// Epd7in5b commands
///
/// Should rarely (never?) be needed directly.
///
/// For more infos about the addresses and what they are doing look into the PDFs.
#[allow(dead_code)]
#[derive(Copy, Clone)]
pub(crate) enum Command {
    /// Set Resolution, LUT selection, BWR pixels, gate scan direction, source shift
    /// direction, booster switch, soft reset.
    PanelSetting = 0x00,

    /// Selecting internal and external power
    PowerSetting = 0x01,

    /// After the Power Off command, the driver will power off following the Power Off
    /// Sequence; BUSY signal will become "0". This command will turn off charge pump,
    /// T-con, source driver, gate driver, VCOM, and temperature sensor, but register
    /// data will be kept until VDD becomes OFF.
    PowerOff = 0x02,

    /// Turning On the Power
    ///
    /// After the Power ON command, the driver will power on following the Power ON
    /// sequence. Once complete, the BUSY signal will become "1".
    PowerOn = 0x04,

    /// Starting data transmission
    BoosterSoftStart = 0x06,

    /// This command makes the chip enter the deep-sleep mode to save power.
    ///
    /// The deep sleep mode would return to stand-by by hardware reset.
    ///
    /// The only one parameter is a check code, the command would be executed if check code = 0xA5.
    DeepSleep = 0x07,

    /// This command starts transmitting data and write them into SRAM.
    ///
    /// BLACK/WHITE plane on this bi-chromatic panel
    DataStartTransmission1 = 0x10,

    /// To stop data transmission, this command must be issued to check the `data_flag`.
    DataStop = 0x11,

    /// After this command is issued, driver will refresh display (data/VCOM) according to
    /// SRAM data and LUT.
    ///
    /// After Display Refresh command, BUSY signal will become "0" until the display
    /// update is finished.
    DisplayRefresh = 0x12,

    /// RED plane on this bi-chromatic panel
    DataStartTransmission2 = 0x13,

    /// Dual SPI mode selection
    DualSpi = 0x15,

    /// This command indicates the interval of Vcom and data output. When setting the
    /// vertical back porch, the total blanking will be kept (20 Hsync).
    VcomAndDataIntervalSetting = 0x50,

    /// This command defines non-overlap period of Gate and Source.
    TconSetting = 0x60,

    /// This command defines alternative resolution and this setting is of higher priority
    /// than the RES\[1:0\] in R00H (PSR).
    TconResolution = 0x61,

    /// This command defines MCU host direct access external memory mode.
    SpiFlashControl = 0x65,

    /// This command reads the IC status.
    GetStatus = 0x71,
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        self as u8
    }
}

/// Panel Setting (PSR) register contents.
///
/// The resolution bits are left at their reset value; the resolution is
/// programmed through [`Command::TconResolution`] which takes priority.
pub(crate) struct PanelSetting {
    /// Load the refresh waveforms from registers instead of OTP
    pub lut_from_register: bool,
    /// Black/white only mode, disabling the chromatic plane
    pub black_white_only: bool,
    /// Gate scan direction up
    pub scan_up: bool,
    /// Source shift direction right
    pub shift_right: bool,
    /// Booster switch on
    pub booster_on: bool,
    /// Keep running (a cleared bit soft-resets the controller)
    pub no_soft_reset: bool,
}

impl PanelSetting {
    /// The vendor configuration for this panel: bi-chromatic, waveforms
    /// from OTP, gate scan up, source shift right, booster on.
    pub fn bwr_otp() -> Self {
        PanelSetting {
            lut_from_register: false,
            black_white_only: false,
            scan_up: true,
            shift_right: true,
            booster_on: true,
            no_soft_reset: true,
        }
    }

    pub fn to_byte(&self) -> u8 {
        *0u8.set_bit(5, self.lut_from_register)
            .set_bit(4, self.black_white_only)
            .set_bit(3, self.scan_up)
            .set_bit(2, self.shift_right)
            .set_bit(1, self.booster_on)
            .set_bit(0, self.no_soft_reset)
    }
}
