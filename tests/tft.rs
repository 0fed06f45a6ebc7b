use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use tft_wire::{Packed16, ReadLine, SdaReader, Strobe, TftBus, Tft, TripleByte};

#[derive(Default)]
struct Recorder {
    transfers: Vec<Vec<u8>>,
    releases: usize,
    acquires: usize,
}

impl TftBus for Recorder {
    fn transfer(&mut self, bytes: &[u8]) {
        self.transfers.push(bytes.to_vec());
    }

    fn release(&mut self) {
        self.releases += 1;
    }

    fn acquire(&mut self) {
        self.acquires += 1;
    }
}

#[derive(Default)]
struct CountPin {
    lows: usize,
    highs: usize,
    driven: bool,
}

impl ReadLine for CountPin {
    fn drive(&mut self) {
        self.driven = true;
    }

    fn float(&mut self) {
        self.driven = false;
    }
}

impl ErrorType for CountPin {
    type Error = Infallible;
}

impl OutputPin for CountPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.lows += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.highs += 1;
        Ok(())
    }
}

struct Pattern(Vec<bool>);

impl ErrorType for Pattern {
    type Error = Infallible;
}

impl InputPin for Pattern {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(if self.0.is_empty() { false } else { self.0.remove(0) })
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|b| !b)
    }
}

#[test]
fn block_lengths_match_encoding_in_every_format() {
    for len in [0u32, 1, 15, 16, 17, 40, 100] {
        let mut packed = Tft::new(Recorder::default(), Packed16);
        packed.push_block(0xBEEF, len);
        let (bus, _) = packed.release();
        let bytes = bus.transfers.concat();
        assert_eq!(bytes.len(), len as usize * 2);
        assert!(bytes.chunks(2).all(|p| p == [0xBE, 0xEF]));
        assert!(bus.transfers.iter().all(|t| t.len() <= 32));

        let mut triple = Tft::new(Recorder::default(), TripleByte);
        triple.push_block(0xBEEF, len);
        let (bus, _) = triple.release();
        assert_eq!(bus.transfers.len(), len as usize * 3);

        let mut strobe = Tft::new(Recorder::default(), Strobe::new(CountPin::default()));
        strobe.push_block(0xBEEF, len);
        let (bus, fmt) = strobe.release();
        let wr = fmt.into_inner();
        assert_eq!(bus.transfers.len(), if len == 0 { 0 } else { 1 });
        assert_eq!(wr.lows, len.saturating_sub(1) as usize);
        assert_eq!(wr.highs, wr.lows);
    }
}

#[test]
fn forty_pixels_go_out_in_three_chunks() {
    let mut tft = Tft::new(Recorder::default(), Packed16);
    tft.push_block(0x0000, 40);
    let sizes: Vec<_> = tft.bus_mut().transfers.iter().map(Vec::len).collect();
    assert_eq!(sizes, [32, 32, 16]);
}

#[test]
fn unswapped_stream_is_a_single_transfer() {
    let data = [0xA55Au16; 100];
    let mut tft = Tft::new(Recorder::default(), Packed16);
    tft.push_pixels(&data);
    assert_eq!(tft.bus_mut().transfers.len(), 1);
    assert_eq!(tft.bus_mut().transfers[0].len(), 200);
}

#[test]
fn scalar_writes_through_facade() {
    let mut tft = Tft::new(Recorder::default(), Packed16);
    tft.write_16(0x1234);
    tft.write_16s(0x1234);
    tft.write_32c(0xAABB, 0xCCDD);
    tft.write_32d(0x1234);
    let t = &tft.bus_mut().transfers;
    assert_eq!(t[0], [0x12, 0x34]);
    assert_eq!(t[1], 0x1234u16.to_ne_bytes());
    assert_eq!(t[2], [0xBB, 0xBB, 0xDD, 0xDD]);
    assert_eq!(t[3], [0x34; 4]);
}

#[test]
fn sda_read_between_writes() {
    let bits = [1, 0, 1, 0, 0, 1, 0, 1].iter().map(|&b| b == 1).collect();
    let mut reader = SdaReader::new(CountPin::default(), Pattern(bits));
    let mut tft = Tft::new(Recorder::default(), Packed16);

    tft.write_8(0x04);
    let id = {
        let mut s = reader.begin_read(tft.bus_mut());
        let b = s.read_8();
        s.end_read();
        b
    };
    tft.write_8(0x00);

    assert_eq!(id, 0xA5);
    let bus = tft.bus_mut();
    assert_eq!((bus.releases, bus.acquires), (1, 1));
    assert_eq!(bus.transfers.len(), 2);

    let (clk, _) = reader.release();
    // one idle-high before driving, then eight pulses
    assert_eq!((clk.lows, clk.highs), (8, 9));
    assert!(!clk.driven);
}
