#![cfg_attr(not(test), no_std)]

//! Pixel streaming for TFT panels on a byte-wide serial bus.
//!
//! RGB565 pixels go in; whatever the panel wants on the wire comes out.

pub mod bus;
pub mod codec;
pub mod color;
pub mod scalar;
pub mod sda;
pub mod tft;
pub mod wire;

#[cfg(feature = "esp32s3")]
pub mod board;

#[cfg(test)]
mod mock;

pub use bus::{NoSwitch, SpiPort, TftBus};
pub use sda::{ReadLine, SdaReader, SdaSession};
pub use tft::Tft;
pub use wire::{Packed16, Strobe, TripleByte, WireFormat};
