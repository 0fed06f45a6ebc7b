//! Byte-order codec: scalar values to wire-order byte sequences.
//!
//! The bus is MSB-first. Everything here normalises to big-endian except
//! [`raw16`], which hands back the value's in-memory bytes untouched for
//! callers that already hold wire-ordered data.

/// 16-bit value, MSB first.
#[inline(always)]
pub const fn be16(c: u16) -> [u8; 2] {
    [(c >> 8) as u8, c as u8]
}

/// 16-bit value as it sits in memory (no swap).
#[inline(always)]
pub const fn raw16(c: u16) -> [u8; 2] {
    c.to_ne_bytes()
}

/// 32-bit value, MSB first.
#[inline(always)]
pub const fn be32(c: u32) -> [u8; 4] {
    [(c >> 24) as u8, (c >> 16) as u8, (c >> 8) as u8, c as u8]
}

/// Address-window pair encoding used by the column/row set commands.
///
/// Only the low byte of each half survives, and each is written twice:
/// `addr_pair(0xAABB, 0xCCDD) == [0xBB, 0xBB, 0xDD, 0xDD]`. Panel command
/// sequences built on top of this depend on these exact bytes.
#[inline(always)]
pub const fn addr_pair(c: u32, d: u32) -> [u8; 4] {
    let lo_c = c as u8;
    let lo_d = d as u8;
    [lo_c, lo_c, lo_d, lo_d]
}

/// Single-value variant of [`addr_pair`]: the low byte of `c` in all four slots.
#[inline(always)]
pub const fn addr_dup(c: u32) -> [u8; 4] {
    [c as u8; 4]
}
