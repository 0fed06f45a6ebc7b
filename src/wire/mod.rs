//! Pixel block and stream writers, one implementation per panel wire format.
//!
//! The format is a type parameter of [`Tft`](crate::tft::Tft), so exactly one
//! of these is compiled into a given driver and there is no runtime dispatch.
//!
//! - [`Packed16`]: standard 16-bit RGB565 over SPI, chunked through a
//!   16-pixel staging buffer.
//! - [`TripleByte`]: 18-bit panels fed one byte at a time (R, G, B).
//! - [`Strobe`]: parallel-latch panels that repeat the last value on each
//!   write-strobe pulse.

mod packed;
mod strobe;
mod triple;

pub use packed::Packed16;
pub use strobe::Strobe;
pub use triple::TripleByte;

use crate::bus::TftBus;

/// Pixels held by one staging buffer.
pub const STAGING_LEN: usize = 16;

/// Wire-ready byte pairs, stack-local to a single call.
pub(crate) type Staging = heapless::Vec<[u8; 2], STAGING_LEN>;

/// How a panel wants its pixels serialised.
pub trait WireFormat {
    /// Write `color` `len` times. `len == 0` touches nothing.
    fn push_block<B: TftBus + ?Sized>(&mut self, bus: &mut B, color: u16, len: u32);

    /// Write `data` in order.
    ///
    /// `swap` is the driver's swap-bytes flag: set when `data` holds logical
    /// RGB565 values, clear when it is already laid out in wire order.
    fn push_pixels<B: TftBus + ?Sized>(&mut self, bus: &mut B, data: &[u16], swap: bool);
}
