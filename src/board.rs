//! ESP32-S3 board binding.
//
// - `init_tft_pins` claims the panel pins from `Peripherals`.
// - `setup_tft` brings up SPI2 and picks the wire format from Cargo features:
//     panel-strobe  -> Strobe (WR on GPIO3)
//     panel-rgb666  -> TripleByte
//     (neither)     -> Packed16
//
// Wiring (ESP32-S3 DevKitC + SPI TFT):
//   SCK  = GPIO10
//   MOSI = GPIO11
//   CS   = GPIO9   (held low, single panel on the bus)
//   DC   = GPIO8
//   RST  = GPIO14
//   BL   = GPIO2
//   WR   = GPIO3   (strobe panels only)
//   SW   = GPIO4   74LVC2G66-style switch in series with SCK/MOSI; high opens it
//   SDA read-back: CLK = GPIO12, DAT = GPIO13, on the panel side of the switch
//
// While the switch is closed the read clock floats, so SPI alone drives the
// panel. A read session opens the switch first, then drives the clock.

use esp_backtrace as _;

use embedded_hal::delay::DelayNs;
use esp_hal::{
    delay::Delay,
    gpio::{Flex, Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::{Peripherals, GPIO10, GPIO11, SPI2},
    spi::master::{Config, ConfigError, Spi},
    spi::Mode,
    time::Rate,
    Blocking,
};

use crate::bus::SpiPort;
use crate::sda::{ReadLine, SdaReader};
use crate::tft::Tft;

/// SPI clock. 40 MHz is stable on the common ILI9341/ST7796 modules.
pub const SPI_HZ: u32 = 40_000_000;

cfg_if::cfg_if! {
    if #[cfg(feature = "panel-strobe")] {
        use crate::wire::Strobe;

        pub type TftType<'a> = Tft<SpiPort<Spi<'a, Blocking>, Output<'a>>, Strobe<Output<'a>>>;

        fn panel_format(wr: Output<'_>) -> Strobe<Output<'_>> {
            Strobe::new(wr)
        }
    } else if #[cfg(feature = "panel-rgb666")] {
        use crate::wire::TripleByte;

        pub type TftType<'a> = Tft<SpiPort<Spi<'a, Blocking>, Output<'a>>, TripleByte>;

        fn panel_format(_wr: Output<'_>) -> TripleByte {
            TripleByte
        }
    } else {
        use crate::wire::Packed16;

        pub type TftType<'a> = Tft<SpiPort<Spi<'a, Blocking>, Output<'a>>, Packed16>;

        fn panel_format(_wr: Output<'_>) -> Packed16 {
            Packed16
        }
    }
}

/// Read clock on a `Flex` pin: input while idle, output only inside a session.
pub struct ReadClock<'a>(Flex<'a>);

impl<'a> ReadClock<'a> {
    fn new(mut pin: Flex<'a>) -> Self {
        pin.set_input_enable(true);
        pin.set_output_enable(false);
        Self(pin)
    }
}

impl embedded_hal::digital::ErrorType for ReadClock<'_> {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for ReadClock<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_high();
        Ok(())
    }
}

impl ReadLine for ReadClock<'_> {
    fn drive(&mut self) {
        self.0.set_output_enable(true);
    }

    fn float(&mut self) {
        self.0.set_output_enable(false);
    }
}

pub type ReaderType<'a> = SdaReader<ReadClock<'a>, Input<'a>>;

/// Board bring-up error.
#[derive(Debug)]
pub enum BoardError {
    Spi(ConfigError),
}

impl From<ConfigError> for BoardError {
    fn from(e: ConfigError) -> Self {
        Self::Spi(e)
    }
}

pub struct TftPins<'a> {
    pub spi2: SPI2<'a>,
    pub sck: GPIO10<'a>,
    pub mosi: GPIO11<'a>,
    pub cs: Output<'a>,
    pub dc: Output<'a>,
    pub rst: Output<'a>,
    pub bl: Output<'a>,
    pub wr: Output<'a>,
    pub bus_sw: Output<'a>,
    pub rd_clk: Flex<'a>,
    pub rd_dat: Input<'a>,
}

/// Pins the caller still drives directly (panel commands, reset, backlight).
pub struct PanelCtrl<'a> {
    pub cs: Output<'a>,
    pub dc: Output<'a>,
    pub rst: Output<'a>,
    pub bl: Output<'a>,
}

pub fn init_tft_pins<'a>(p: Peripherals) -> TftPins<'a> {
    // Control pins, do NOT touch GPIO10/11 here (SPI SCK/MOSI)
    let cs  = Output::new(p.GPIO9,  Level::Low,  OutputConfig::default());
    let dc  = Output::new(p.GPIO8,  Level::High, OutputConfig::default());
    let rst = Output::new(p.GPIO14, Level::High, OutputConfig::default());
    let bl  = Output::new(p.GPIO2,  Level::Low,  OutputConfig::default());
    let wr  = Output::new(p.GPIO3,  Level::High, OutputConfig::default());

    // Switch closed: SPI owns the panel lines from the start
    let bus_sw = Output::new(p.GPIO4, Level::Low, OutputConfig::default());

    // Read-back lines stay inputs until a read session drives the clock
    let rd_clk = Flex::new(p.GPIO12);
    let rd_dat = Input::new(p.GPIO13, InputConfig::default().with_pull(Pull::None));

    TftPins {
        spi2: p.SPI2,
        sck: p.GPIO10,
        mosi: p.GPIO11,
        cs, dc, rst, bl, wr, bus_sw,
        rd_clk, rd_dat,
    }
}

pub fn setup_tft<'a>(
    pins: TftPins<'a>,
) -> Result<(TftType<'a>, ReaderType<'a>, PanelCtrl<'a>), BoardError> {
    let TftPins {
        spi2,
        sck,
        mosi,
        cs,
        dc,
        mut rst,
        mut bl,
        wr,
        bus_sw,
        rd_clk,
        rd_dat,
    } = pins;

    let mut delay = Delay::new();

    // Hardware reset & backlight
    rst.set_low();
    delay.delay_ms(10);
    rst.set_high();
    delay.delay_ms(120);
    bl.set_high();

    // SPI @ 40 MHz, Mode 0
    let spi = Spi::new(
        spi2,
        Config::default()
            .with_frequency(Rate::from_hz(SPI_HZ))
            .with_mode(Mode::_0),
    )?
    .with_sck(sck)
    .with_mosi(mosi);

    let tft = Tft::new(SpiPort::with_switch(spi, bus_sw), panel_format(wr));
    let reader = SdaReader::new(ReadClock::new(rd_clk), rd_dat);

    Ok((tft, reader, PanelCtrl { cs, dc, rst, bl }))
}
