//! # Driver for the HT1621 segment LCD controller
//!
//! The HT1621 drives up to 128 LCD segments and is the chip on most of the cheap
//! "6 digit 7-segment LCD, 3 wires" modules. It talks a write-only 3-wire protocol
//! (CS, WR, DATA) which this crate bit bangs on plain GPIO pins from `embedded_hal`.
//!
//! The driver keeps the display content in a row buffer. Fill it with set_string(),
//! set_char() or set_row() and send it with flush():
//!
//! ```ignore
//! let bus = HT1621GpioBackend::new(cs, wr, data)?;
//! let mut lcd = HT1621::new(bus, Config::default());
//! lcd.init()?;
//! lcd.set_string(0, "-12.5", true);
//! lcd.flush()?;
//! ```
//!
//! Feature flags:
//!  - `textmode`: set_fmt() to show `format_args!` output without an allocator
//!  - `defmt`: `defmt::Format` for the public types and debug logging of bring-up
#![cfg_attr(not(test), no_std)]

/// Bytes of display RAM, each byte covers two of the 32 nibble addresses
pub const ROWS: usize = 16;
/// Digits of the 6 digit modules, in rows 5 (leftmost) down to 0 (rightmost)
pub const DIGITS: u8 = 6;

pub mod backend;
pub mod config;
pub mod display;
pub mod font;
pub mod frame;
pub mod instructions;
mod text;

#[cfg(feature = "textmode")]
pub mod textmode;

#[cfg(test)]
mod mock;

pub use crate::{
    backend::{HT1621Backend, HT1621GpioBackend, NoDelay},
    config::Config,
    display::HT1621,
    font::glyph,
    frame::Frame,
    instructions::{Command, Mode},
};
