//! Driver facade: one bus, one wire format, one swap flag.

use embedded_graphics::pixelcolor::Rgb565;

use crate::bus::TftBus;
use crate::color;
use crate::scalar;
use crate::wire::WireFormat;

/// Pixel pusher for a single panel.
///
/// `F` fixes the wire format at build time; every call below is
/// monomorphised for it.
pub struct Tft<B, F> {
    bus: B,
    format: F,
    swap_bytes: bool,
}

impl<B, F> Tft<B, F>
where
    B: TftBus,
    F: WireFormat,
{
    /// Wrap `bus`. The swap flag starts clear.
    pub fn new(bus: B, format: F) -> Self {
        Self { bus, format, swap_bytes: false }
    }

    /// Set when pixel buffers hold logical RGB565 values that must be put
    /// in wire order; clear when they already are.
    #[inline]
    pub fn set_swap_bytes(&mut self, swap: bool) {
        self.swap_bytes = swap;
    }

    #[inline]
    pub fn swap_bytes(&self) -> bool {
        self.swap_bytes
    }

    /// `len` pixels of `color`.
    #[inline]
    pub fn push_block(&mut self, color: u16, len: u32) {
        self.format.push_block(&mut self.bus, color, len);
    }

    /// Pixels from `data`, in order, honouring the swap flag.
    #[inline]
    pub fn push_pixels(&mut self, data: &[u16]) {
        self.format.push_pixels(&mut self.bus, data, self.swap_bytes);
    }

    /// [`push_block`](Self::push_block) for an embedded-graphics colour.
    pub fn fill(&mut self, color: Rgb565, len: u32) {
        self.push_block(color::raw(color), len);
    }

    // ---- Scalar writes ----

    #[inline]
    pub fn write_8(&mut self, c: u8) {
        scalar::write_8(&mut self.bus, c);
    }

    #[inline]
    pub fn write_16(&mut self, c: u16) {
        scalar::write_16(&mut self.bus, c);
    }

    #[inline]
    pub fn write_16s(&mut self, c: u16) {
        scalar::write_16s(&mut self.bus, c);
    }

    #[inline]
    pub fn write_32(&mut self, c: u32) {
        scalar::write_32(&mut self.bus, c);
    }

    #[inline]
    pub fn write_32c(&mut self, c: u32, d: u32) {
        scalar::write_32c(&mut self.bus, c, d);
    }

    #[inline]
    pub fn write_32d(&mut self, c: u32) {
        scalar::write_32d(&mut self.bus, c);
    }

    /// The bus, e.g. to open an [`SdaReader`](crate::sda::SdaReader) session.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Tear down and return the parts.
    pub fn release(self) -> (B, F) {
        (self.bus, self.format)
    }
}
