// Standard SPI 16-bit colour.

use bytemuck::cast_slice;

use super::{Staging, WireFormat, STAGING_LEN};
use crate::bus::TftBus;
use crate::codec;

/// 16-bit packed RGB565, MSB first, bulk transfers of up to 16 pixels.
#[derive(Debug, Default, Clone, Copy)]
pub struct Packed16;

impl WireFormat for Packed16 {
    fn push_block<B: TftBus + ?Sized>(&mut self, bus: &mut B, color: u16, len: u32) {
        if len == 0 {
            return;
        }

        // Fill the staging buffer with our colour once
        let be = codec::be16(color);
        let mut buf = Staging::new();
        while buf.push(be).is_ok() {}

        let mut remaining = len;
        while remaining > 0 {
            let take = remaining.min(STAGING_LEN as u32);
            bus.transfer(cast_slice(&buf[..take as usize]));
            remaining -= take;
        }
    }

    fn push_pixels<B: TftBus + ?Sized>(&mut self, bus: &mut B, data: &[u16], swap: bool) {
        if data.is_empty() {
            return;
        }

        if !swap {
            // Already in wire order: hand the caller's buffer straight to the bus
            bus.transfer(cast_slice(data));
            return;
        }

        let mut buf = Staging::new();
        for chunk in data.chunks(STAGING_LEN) {
            buf.clear();
            for &c in chunk {
                buf.push(codec::be16(c)).ok();
            }
            bus.transfer(cast_slice(&buf[..]));
        }
    }
}
