// Panels with a write strobe (RPi-style TFT hats).

use embedded_hal::digital::OutputPin;

use super::WireFormat;
use crate::bus::TftBus;
use crate::scalar::{write_16, write_16s};

/// Writes a value once, then pulses WR to have the panel latch it again.
///
/// Only constant-colour blocks use the strobe; streams write every pixel.
pub struct Strobe<WR> {
    wr: WR,
}

impl<WR: OutputPin> Strobe<WR> {
    pub fn new(wr: WR) -> Self {
        Self { wr }
    }

    pub fn into_inner(self) -> WR {
        self.wr
    }

    #[inline(always)]
    fn pulse(&mut self) {
        // Pin errors have nowhere to go on this path
        self.wr.set_low().ok();
        self.wr.set_high().ok();
    }
}

impl<WR: OutputPin> WireFormat for Strobe<WR> {
    fn push_block<B: TftBus + ?Sized>(&mut self, bus: &mut B, color: u16, len: u32) {
        if len == 0 {
            return;
        }
        write_16(bus, color);
        for _ in 1..len {
            self.pulse();
        }
    }

    fn push_pixels<B: TftBus + ?Sized>(&mut self, bus: &mut B, data: &[u16], swap: bool) {
        if swap {
            for &c in data {
                write_16s(bus, c);
            }
        } else {
            for &c in data {
                write_16(bus, c);
            }
        }
    }
}
