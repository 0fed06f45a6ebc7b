//! Software read-back over a bidirectional SDA line.
//!
//! Some panels return register data on the same pin the host writes on,
//! which hardware SPI can't do. [`SdaReader::begin_read`] releases the bus,
//! after which bytes are clocked in by hand. The returned [`SdaSession`]
//! reacquires the bus when it ends or is dropped, so every `begin_read` is
//! matched by exactly one reacquire.
//!
//! The clock line only drives inside a session: it is switched to output
//! after the bus lets go and floated again before the bus takes over.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::bus::TftBus;

/// A line that floats (input only) until a read session needs to drive it.
pub trait ReadLine {
    fn drive(&mut self);
    fn float(&mut self);
}

/// Clock and data lines used for bit-banged reads.
pub struct SdaReader<CLK, DAT> {
    clk: CLK,
    dat: DAT,
}

impl<CLK, DAT> SdaReader<CLK, DAT>
where
    CLK: OutputPin + ReadLine,
    DAT: InputPin,
{
    /// The clock is floated here so it never fights the bus while idle.
    pub fn new(mut clk: CLK, dat: DAT) -> Self {
        clk.float();
        Self { clk, dat }
    }

    pub fn release(self) -> (CLK, DAT) {
        (self.clk, self.dat)
    }

    /// Detach the hardware bus and start a read session.
    pub fn begin_read<'a, B>(&'a mut self, bus: &'a mut B) -> SdaSession<'a, B, CLK, DAT>
    where
        B: TftBus + ?Sized,
    {
        bus.release();
        self.clk.set_high().ok();
        self.clk.drive();
        log::debug!("sda read: bus released");
        SdaSession { bus, lines: self }
    }
}

/// An open read bracket. Holds the bus so nothing can write until it ends.
pub struct SdaSession<'a, B: TftBus + ?Sized, CLK: ReadLine, DAT> {
    bus: &'a mut B,
    lines: &'a mut SdaReader<CLK, DAT>,
}

impl<B, CLK, DAT> SdaSession<'_, B, CLK, DAT>
where
    B: TftBus + ?Sized,
    CLK: OutputPin + ReadLine,
    DAT: InputPin,
{
    /// Clock in one byte, MSB first.
    pub fn read_8(&mut self) -> u8 {
        let mut ret = 0u8;
        for _ in 0..8 {
            ret <<= 1;
            self.lines.clk.set_low().ok();
            if self.lines.dat.is_high().unwrap_or(false) {
                ret |= 1;
            }
            self.lines.clk.set_high().ok();
        }
        ret
    }

    /// Fill `buf` with consecutive bytes.
    pub fn read_into(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b = self.read_8();
        }
    }

    /// Close the bracket and hand the lines back to the bus.
    pub fn end_read(self) {
        // Drop does the work
    }
}

impl<B: TftBus + ?Sized, CLK: ReadLine, DAT> Drop for SdaSession<'_, B, CLK, DAT> {
    fn drop(&mut self) {
        self.lines.clk.float();
        self.bus.acquire();
        log::debug!("sda read: bus reacquired");
    }
}
