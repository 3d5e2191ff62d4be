// This example draws a small greeting and a red accent line on the 7.5" (B)
// V2 panel attached to a Raspberry Pi, then puts the panel to sleep.
use embedded_graphics::{
    mono_font::ascii::FONT_10X20,
    mono_font::MonoTextStyleBuilder,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{Baseline, Text, TextStyleBuilder},
};
use embedded_hal::delay::DelayNs;
use epd7in5b_v2::{epd7in5b_v2::*, prelude::*};
use linux_embedded_hal::{
    spidev::{self, SpidevOptions},
    sysfs_gpio::Direction,
    Delay, SPIError, SpidevDevice, SysfsPin,
};

fn main() -> Result<(), SPIError> {
    // Set up the device
    let mut spi = SpidevDevice::open("/dev/spidev0.0").expect("spidev directory");
    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(4_000_000)
        .mode(spidev::SpiModeFlags::SPI_MODE_0)
        .build();
    spi.configure(&options).expect("spi configuration");

    let busy = SysfsPin::new(24);
    busy.export().expect("busy export");
    while !busy.is_exported() {}
    busy.set_direction(Direction::In).expect("busy Direction");

    let dc = SysfsPin::new(25);
    dc.export().expect("dc export");
    while !dc.is_exported() {}
    dc.set_direction(Direction::Out).expect("dc Direction");
    dc.set_value(1).expect("dc Value set to 1");

    let rst = SysfsPin::new(17);
    rst.export().expect("rst export");
    while !rst.is_exported() {}
    rst.set_direction(Direction::Out).expect("rst Direction");
    rst.set_value(1).expect("rst Value set to 1");

    let mut delay = Delay {};

    let mut epd = Epd7in5b::new(&mut spi, busy, dc, rst, &mut delay, None).expect("epd new");
    println!("Device successfully initialized!");

    // Start from a white panel
    epd.set_background_color(TriColor::White);
    epd.clear_frame(&mut spi, &mut delay).expect("clear");

    let mut display = Display7in5b::default();

    let style = MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(TriColor::Black)
        .build();
    let text_style = TextStyleBuilder::new().baseline(Baseline::Top).build();

    let _ = Text::with_text_style("Hello from epd7in5b-v2!", Point::new(40, 40), style, text_style)
        .draw(&mut display);

    let _ = Line::new(Point::new(40, 80), Point::new(360, 80))
        .into_styled(PrimitiveStyle::with_stroke(TriColor::Chromatic, 4))
        .draw(&mut display);

    epd.update_and_display_color_frame(
        &mut spi,
        &mut delay,
        display.bw_buffer(),
        display.chromatic_buffer(),
    )
    .expect("display frame");
    println!("Frame displayed, sleeping in 5s");

    delay.delay_ms(5000u32);
    epd.sleep(&mut spi, &mut delay).expect("sleep");
    Ok(())
}
