//! Pixel bus demo
//! ========================================
//! cargo run --release --features esp32s3
//! (add panel-strobe or panel-rgb666 for those panels)
//! ========================================
//!
//! Reads the panel ID over the SDA line, then cycles full-screen fills
//! and a gradient band.

//% CHIPS: esp32s3
//% FEATURES: esp-hal/unstable

#![no_std]
#![no_main]

// Define the application description, which is placed in a special section of the binary.
// This is used by the bootloader to verify the application.
// The macro automatically fills in the fields.
esp_bootloader_esp_idf::esp_app_desc!();

use esp_backtrace as _;
use esp_hal::main;
use esp_println::println;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use tft_wire::board::{init_tft_pins, setup_tft, PanelCtrl, TftType};

const WIDTH: u16 = 320;
const HEIGHT: u16 = 240;

// MIPI DCS opcodes used below
const RDDID: u8 = 0x04;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;

fn command(tft: &mut TftType<'_>, ctrl: &mut PanelCtrl<'_>, cmd: u8) {
    ctrl.dc.set_low();
    tft.write_8(cmd);
    ctrl.dc.set_high();
}

fn set_window(tft: &mut TftType<'_>, ctrl: &mut PanelCtrl<'_>, x0: u16, y0: u16, x1: u16, y1: u16) {
    command(tft, ctrl, CASET);
    tft.write_32(((x0 as u32) << 16) | x1 as u32);
    command(tft, ctrl, RASET);
    tft.write_32(((y0 as u32) << 16) | y1 as u32);
    command(tft, ctrl, RAMWR);
}

#[main]
fn main() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    let pins = init_tft_pins(peripherals);
    let (mut tft, mut reader, mut ctrl) = setup_tft(pins).expect("TFT setup failed");

    // Panel ID: command on the bus, reply bit-banged off SDA
    command(&mut tft, &mut ctrl, RDDID);
    let mut id = [0u8; 4];
    {
        let mut rd = reader.begin_read(tft.bus_mut());
        rd.read_into(&mut id);
    }
    println!("panel id {:02X} {:02X} {:02X}", id[1], id[2], id[3]);

    // Gradient row, logical RGB565 values -> needs swapping onto the wire
    let mut row = [0u16; WIDTH as usize];
    for (x, px) in row.iter_mut().enumerate() {
        let v = (x * 31 / (WIDTH as usize - 1)) as u16;
        *px = (v << 11) | v;
    }
    tft.set_swap_bytes(true);

    let colors = [Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE, Rgb565::BLACK];
    let mut frame: usize = 0;
    loop {
        let c = colors[frame % colors.len()];
        set_window(&mut tft, &mut ctrl, 0, 0, WIDTH - 1, HEIGHT - 1);
        tft.fill(c, WIDTH as u32 * HEIGHT as u32);

        set_window(&mut tft, &mut ctrl, 0, HEIGHT / 2 - 8, WIDTH - 1, HEIGHT / 2 + 7);
        for _ in 0..16 {
            tft.push_pixels(&row);
        }

        if let Some(e) = tft.bus_mut().take_fault() {
            println!("spi fault: {:?}", e);
        }

        frame = frame.wrapping_add(1);
        for _ in 0..2_000_000 { core::hint::spin_loop(); }
    }
}
