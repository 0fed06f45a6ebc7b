// Test doubles: a bus that records every transfer and pins that log edges.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::bus::TftBus;
use crate::sda::ReadLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Transfer(usize),
    Release,
    Acquire,
    Low(&'static str),
    High(&'static str),
    Drive(&'static str),
    Float(&'static str),
}

/// Event log shared between the bus and any pins, so ordering can be checked.
pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Default)]
pub struct MockBus {
    pub transfers: Vec<Vec<u8>>,
    pub releases: usize,
    pub acquires: usize,
    pub log: Option<Log>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: &Log) -> Self {
        Self { log: Some(log.clone()), ..Self::default() }
    }

    /// All transferred bytes, concatenated.
    pub fn bytes(&self) -> Vec<u8> {
        self.transfers.concat()
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.transfers.iter().map(Vec::len).collect()
    }

    fn note(&self, e: Event) {
        if let Some(l) = &self.log {
            l.borrow_mut().push(e);
        }
    }
}

impl TftBus for MockBus {
    fn transfer(&mut self, bytes: &[u8]) {
        self.note(Event::Transfer(bytes.len()));
        self.transfers.push(bytes.to_vec());
    }

    fn release(&mut self) {
        self.note(Event::Release);
        self.releases += 1;
    }

    fn acquire(&mut self) {
        self.note(Event::Acquire);
        self.acquires += 1;
    }
}

/// Output pin that records its edges into a shared log.
pub struct LogPin {
    pub name: &'static str,
    pub log: Log,
}

impl LogPin {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self { name, log: log.clone() }
    }
}

impl ErrorType for LogPin {
    type Error = Infallible;
}

impl OutputPin for LogPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Low(self.name));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::High(self.name));
        Ok(())
    }
}

impl ReadLine for LogPin {
    fn drive(&mut self) {
        self.log.borrow_mut().push(Event::Drive(self.name));
    }

    fn float(&mut self) {
        self.log.borrow_mut().push(Event::Float(self.name));
    }
}

/// Input pin that plays back a fixed bit sequence, one bit per read.
pub struct BitSource {
    pub bits: Vec<bool>,
    pub pos: usize,
}

impl BitSource {
    /// Bits of `bytes`, MSB first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bits = bytes
            .iter()
            .flat_map(|b| (0..8).rev().map(move |i| (b >> i) & 1 == 1))
            .collect();
        Self { bits, pos: 0 }
    }
}

impl ErrorType for BitSource {
    type Error = Infallible;
}

impl InputPin for BitSource {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let bit = self.bits.get(self.pos).copied().unwrap_or(false);
        self.pos += 1;
        Ok(bit)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|b| !b)
    }
}
