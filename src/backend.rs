//! "Bit bang" transmitter for the HT1621 3-wire bus
//!
//! The HT1621 has no SPI compatible interface: frames are 12 or 17 bits long, and the
//! chip latches DATA on the rising edge of WR. So the bits are clocked out by hand on
//! three GPIO pins.
//!
//! Use HT1621GpioBackend::new() for slow boards who do not need a delay
//! and HT1621GpioBackend::new_with_delay() for fast(er) boards.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::frame::Frame;

/// Everything the driver needs from the bus: put one frame on the wire.
pub trait HT1621Backend {
    type Error;
    fn write_frame(&mut self, frame: &Frame) -> Result<(), Self::Error>;
}

/// Used to run without delay on a slow enough clock speed.
///
/// The HT1621 needs WR low and high for at least 1.67µs each at 5V (3.34µs at 3V).
pub struct NoDelay {}

impl DelayUs<u8> for NoDelay {
    #[inline]
    fn delay_us(&mut self, _us: u8) {}
}

/// HT1621 bus on three GPIO output pins: CS (chip select), WR (write strobe) and DATA.
pub struct HT1621GpioBackend<CS, WR, DATA, DELAY = NoDelay> {
    cs: CS,
    wr: WR,
    data: DATA,
    delay: DELAY,
}

impl<CS, WR, DATA, ERR> HT1621GpioBackend<CS, WR, DATA, NoDelay>
where
    CS: OutputPin<Error = ERR>,
    WR: OutputPin<Error = ERR>,
    DATA: OutputPin<Error = ERR>,
{
    /// Constructs the bus from CS, WR and DATA pins and drives all of them high (idle).
    /// If your clock frequency is high enough to violate the WR timing please consider
    /// `new_with_delay`, otherwise the chip misses bits.
    pub fn new(
        cs: CS,
        wr: WR,
        data: DATA,
    ) -> Result<HT1621GpioBackend<CS, WR, DATA, NoDelay>, ERR> {
        HT1621GpioBackend::new_with_delay(cs, wr, data, NoDelay {})
    }
}

impl<CS, WR, DATA, DELAY, ERR> HT1621GpioBackend<CS, WR, DATA, DELAY>
where
    CS: OutputPin<Error = ERR>,
    WR: OutputPin<Error = ERR>,
    DATA: OutputPin<Error = ERR>,
    DELAY: DelayUs<u8>,
{
    /// Constructs the bus with a delay of a few microseconds around every WR edge.
    ///
    /// ```ignore
    /// let bus = HT1621GpioBackend::new_with_delay(cs, wr, data, delay)?;
    /// ```
    pub fn new_with_delay(
        mut cs: CS,
        mut wr: WR,
        mut data: DATA,
        delay: DELAY,
    ) -> Result<HT1621GpioBackend<CS, WR, DATA, DELAY>, ERR> {
        cs.set_high()?;
        wr.set_high()?;
        data.set_high()?;
        Ok(HT1621GpioBackend { cs, wr, data, delay })
    }

    /// Gives back the pins and the delay.
    pub fn release(self) -> (CS, WR, DATA, DELAY) {
        (self.cs, self.wr, self.data, self.delay)
    }

    #[inline]
    fn write_bit(&mut self, high: bool) -> Result<(), ERR> {
        self.wr.set_low()?;
        if high {
            self.data.set_high()?;
        } else {
            self.data.set_low()?;
        }
        self.delay.delay_us(4);
        self.wr.set_high()?;
        self.delay.delay_us(4);
        Ok(())
    }

    /// Sends the `count` most significant bits of `value`, MSB first.
    ///
    /// CS must already be low. A count of 0 sends nothing, counts above 8 are capped.
    pub fn write_bits(&mut self, mut value: u8, count: u8) -> Result<(), ERR> {
        for _ in 0..count.min(8) {
            self.write_bit((value & 0x80) == 0x80)?;
            value <<= 1;
        }
        Ok(())
    }
}

impl<CS, WR, DATA, DELAY, ERR> HT1621Backend for HT1621GpioBackend<CS, WR, DATA, DELAY>
where
    CS: OutputPin<Error = ERR>,
    WR: OutputPin<Error = ERR>,
    DATA: OutputPin<Error = ERR>,
    DELAY: DelayUs<u8>,
{
    type Error = ERR;

    fn write_frame(&mut self, frame: &Frame) -> Result<(), ERR> {
        self.cs.set_low()?;
        for field in frame.fields() {
            self.write_bits(field.bits, field.count)?;
        }
        self.cs.set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::Mode;
    use crate::mock::{Bus, CountingDelay, Line, MockPin};

    fn backend(bus: &Bus) -> HT1621GpioBackend<MockPin, MockPin, MockPin> {
        HT1621GpioBackend::new(bus.pin(Line::Cs), bus.pin(Line::Wr), bus.pin(Line::Data)).unwrap()
    }

    #[test]
    fn new_idles_all_lines_high() {
        let bus = Bus::new();
        let _backend = backend(&bus);
        assert_eq!(bus.level(Line::Cs), Some(true));
        assert_eq!(bus.level(Line::Wr), Some(true));
        assert_eq!(bus.level(Line::Data), Some(true));
    }

    #[test]
    fn bits_go_out_msb_first() {
        let bus = Bus::new();
        let mut backend = backend(&bus);
        bus.reset();
        backend.write_bits(0b1011_0000, 4).unwrap();
        assert_eq!(bus.latched(), [true, false, true, true]);
    }

    #[test]
    fn zero_bits_is_a_no_op() {
        let bus = Bus::new();
        let mut backend = backend(&bus);
        bus.reset();
        backend.write_bits(0xff, 0).unwrap();
        assert!(bus.events().is_empty());
    }

    #[test]
    fn data_settles_while_wr_is_low() {
        let bus = Bus::new();
        let mut backend = backend(&bus);
        bus.reset();
        backend.write_bits(0x80, 1).unwrap();
        assert_eq!(
            bus.events(),
            [(Line::Wr, false), (Line::Data, true), (Line::Wr, true)]
        );
    }

    #[test]
    fn delay_waits_after_both_wr_edges() {
        let bus = Bus::new();
        let mut backend = HT1621GpioBackend::new_with_delay(
            bus.pin(Line::Cs),
            bus.pin(Line::Wr),
            bus.pin(Line::Data),
            CountingDelay::default(),
        )
        .unwrap();
        backend.write_frame(&Frame::data(Mode::Write, 1, 0x0f)).unwrap();
        assert_eq!(bus.frames()[0].len(), 17);

        let (_, _, _, delay) = backend.release();
        assert_eq!(delay.calls, 2 * 17);
        assert!(delay.total_us >= delay.calls);
    }

    #[test]
    fn command_frame_on_the_wire() {
        let bus = Bus::new();
        let mut backend = backend(&bus);
        backend.write_frame(&Frame::command(0x03)).unwrap();

        let frames = bus.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 12);
        assert_eq!(crate::mock::bits_to_u32(&frames[0]), 0b100_0000_0011_0);
        assert_eq!(bus.level(Line::Cs), Some(true));
    }

    #[test]
    fn data_frame_on_the_wire() {
        let bus = Bus::new();
        let mut backend = backend(&bus);
        backend.write_frame(&Frame::data(Mode::Write, 5, 0xC3)).unwrap();

        let frames = bus.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 17);
        assert_eq!(crate::mock::bits_to_u32(&frames[0]), 0b101_000101_1100_0011);
    }
}
