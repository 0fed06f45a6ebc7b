//! Bus handle used by every writer in this crate.
//!
//! Writers never own the bus: they get `&mut B` for the duration of one call.
//! [`SpiPort`] adapts any embedded-hal 1.0 `SpiBus<u8>`.

use core::convert::Infallible;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::SpiBus;

/// Byte-wide, write-only view of the panel bus.
///
/// `transfer` is fire-and-forget: it cannot fail from the caller's side.
/// An implementation that can see errors keeps them to itself (see
/// [`SpiPort::take_fault`]).
pub trait TftBus {
    /// Blocking write of `bytes` in order.
    fn transfer(&mut self, bytes: &[u8]);

    /// Let go of the data/clock lines so they can be bit-banged.
    fn release(&mut self);

    /// Take the lines back after [`release`](Self::release).
    fn acquire(&mut self);
}

impl<T: TftBus + ?Sized> TftBus for &mut T {
    #[inline]
    fn transfer(&mut self, bytes: &[u8]) {
        (**self).transfer(bytes)
    }

    #[inline]
    fn release(&mut self) {
        (**self).release()
    }

    #[inline]
    fn acquire(&mut self) {
        (**self).acquire()
    }
}

/// [`TftBus`] over an embedded-hal `SpiBus<u8>`.
///
/// `SW` drives an isolation switch between the SPI pins and the panel:
/// high while released (SPI disconnected, read lines own the panel side),
/// low otherwise. Boards without one use [`SpiPort::new`] and [`NoSwitch`].
///
/// The first error the bus reports is latched and logged once; later
/// transfers keep going.
pub struct SpiPort<SPI: SpiBus<u8>, SW = NoSwitch> {
    spi: SPI,
    switch: SW,
    released: bool,
    fault: Option<SPI::Error>,
}

/// Placeholder switch for boards whose read lines never share a net with SPI.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSwitch;

impl digital::ErrorType for NoSwitch {
    type Error = Infallible;
}

impl OutputPin for NoSwitch {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

impl<SPI> SpiPort<SPI, NoSwitch>
where
    SPI: SpiBus<u8>,
{
    pub fn new(spi: SPI) -> Self {
        Self::with_switch(spi, NoSwitch)
    }
}

impl<SPI, SW> SpiPort<SPI, SW>
where
    SPI: SpiBus<u8>,
    SW: OutputPin,
{
    /// Bus behind an isolation switch. The switch is closed (low) on return.
    pub fn with_switch(spi: SPI, mut switch: SW) -> Self {
        switch.set_low().ok();
        Self { spi, switch, released: false, fault: None }
    }

    /// Give the SPI bus and switch back.
    pub fn into_inner(self) -> (SPI, SW) {
        (self.spi, self.switch)
    }

    /// True between `release` and `acquire`.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Take the latched bus error, if any, clearing it.
    pub fn take_fault(&mut self) -> Option<SPI::Error> {
        self.fault.take()
    }

    fn latch(&mut self, e: SPI::Error) {
        if self.fault.is_none() {
            log::warn!("spi fault latched: {:?}", e);
            self.fault = Some(e);
        }
    }
}

impl<SPI, SW> TftBus for SpiPort<SPI, SW>
where
    SPI: SpiBus<u8>,
    SW: OutputPin,
{
    fn transfer(&mut self, bytes: &[u8]) {
        debug_assert!(!self.released, "transfer while bus is released");
        if let Err(e) = self.spi.write(bytes) {
            self.latch(e);
        }
    }

    fn release(&mut self) {
        // Drain the FIFO before cutting the SPI off the panel
        if let Err(e) = self.spi.flush() {
            self.latch(e);
        }
        self.switch.set_high().ok();
        self.released = true;
        log::trace!("spi released");
    }

    fn acquire(&mut self) {
        self.switch.set_low().ok();
        self.released = false;
        log::trace!("spi acquired");
    }
}
