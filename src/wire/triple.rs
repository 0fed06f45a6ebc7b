// 18-bit colour panels on a byte-wide bus.

use super::WireFormat;
use crate::bus::TftBus;
use crate::color;
use crate::scalar::write_8;

/// Three bytes per pixel (R, G, B), each a separate 8-bit write.
#[derive(Debug, Default, Clone, Copy)]
pub struct TripleByte;

impl WireFormat for TripleByte {
    fn push_block<B: TftBus + ?Sized>(&mut self, bus: &mut B, color: u16, len: u32) {
        let [r, g, b] = color::split(color);
        for _ in 0..len {
            write_8(bus, r);
            write_8(bus, g);
            write_8(bus, b);
        }
    }

    fn push_pixels<B: TftBus + ?Sized>(&mut self, bus: &mut B, data: &[u16], swap: bool) {
        for &c in data {
            let c = if swap { color::swap(c) } else { c };
            let [r, g, b] = color::split(c);
            write_8(bus, r);
            write_8(bus, g);
            write_8(bus, b);
        }
    }
}
