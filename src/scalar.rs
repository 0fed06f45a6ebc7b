//! Single-value bus writes.
//!
//! Each function issues exactly one [`TftBus::transfer`]. None of them can
//! fail: bus faults are the bus implementation's business.

use crate::bus::TftBus;
use crate::codec;

#[inline]
pub fn write_8<B: TftBus + ?Sized>(bus: &mut B, c: u8) {
    bus.transfer(&[c]);
}

/// 16-bit write, MSB first.
#[inline]
pub fn write_16<B: TftBus + ?Sized>(bus: &mut B, c: u16) {
    bus.transfer(&codec::be16(c));
}

/// 16-bit write of the value's in-memory bytes, for data that is already
/// in wire order.
#[inline]
pub fn write_16s<B: TftBus + ?Sized>(bus: &mut B, c: u16) {
    bus.transfer(&codec::raw16(c));
}

/// 32-bit write, MSB first.
#[inline]
pub fn write_32<B: TftBus + ?Sized>(bus: &mut B, c: u32) {
    bus.transfer(&codec::be32(c));
}

/// Address-window write of two halves. See [`codec::addr_pair`] for the
/// exact (truncating) byte layout.
#[inline]
pub fn write_32c<B: TftBus + ?Sized>(bus: &mut B, c: u32, d: u32) {
    bus.transfer(&codec::addr_pair(c, d));
}

/// Address-window write of one value repeated. See [`codec::addr_dup`].
#[inline]
pub fn write_32d<B: TftBus + ?Sized>(bus: &mut B, c: u32) {
    bus.transfer(&codec::addr_dup(c));
}
