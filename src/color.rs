//! RGB565 helpers.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Raw RGB565 storage of an embedded-graphics colour.
#[inline(always)]
pub fn raw(color: Rgb565) -> u16 {
    color.into_storage()
}

/// Exchange the two bytes of a pixel.
#[inline(always)]
pub const fn swap(c: u16) -> u16 {
    c.rotate_left(8)
}

/// Split RGB565 into three 8-bit channels for 18-bit panels.
///
/// Each channel lands in the top bits of its byte; the low bits are zero.
#[inline(always)]
pub const fn split(c: u16) -> [u8; 3] {
    [
        ((c & 0xF800) >> 8) as u8,
        ((c & 0x07E0) >> 3) as u8,
        ((c & 0x001F) << 3) as u8,
    ]
}
