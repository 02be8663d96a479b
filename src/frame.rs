//! Frames as they go over the wire
//!
//! A frame is everything sent while CS is low: a 3 bit mode tag followed by either a
//! command or an address and a data byte. Fields are stored left aligned, so the
//! transmitter always takes the most significant bits of each field first.
//!
//! ```text
//! command: 1 0 0 | c7 c6 c5 c4 c3 c2 c1 c0 | x                         (12 bits)
//! write:   1 0 1 | a5 a4 a3 a2 a1 a0       | d7 d6 d5 d4 d3 d2 d1 d0   (17 bits)
//! ```

use crate::instructions::Mode;

/// Up to 8 bits of a frame, left aligned in `bits`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    pub bits: u8,
    pub count: u8,
}

impl Field {
    pub const fn new(bits: u8, count: u8) -> Field {
        Field { bits, count }
    }
}

/// One complete transmission between CS going low and CS going high again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    fields: [Field; 3],
}

impl Frame {
    /// A command frame: tag `100`, the command byte and the ignored 9th command bit
    pub fn command(command: u8) -> Frame {
        Frame {
            fields: [
                Field::new(Mode::Command.byte(), 3),
                Field::new(command, 8),
                Field::new(0, 1),
            ],
        }
    }

    /// A data frame: mode tag, 6 bit address and one byte of data.
    ///
    /// The address is not checked, only its lower 6 bits make it onto the wire.
    pub fn data(mode: Mode, address: u8, value: u8) -> Frame {
        Frame {
            fields: [
                Field::new(mode.byte(), 3),
                Field::new(address << 2, 6),
                Field::new(value, 8),
            ],
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Number of write strobes this frame takes
    pub fn bit_len(&self) -> u32 {
        self.fields.iter().map(|field| field.count as u32).sum()
    }
}
