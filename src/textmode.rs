//! # Formatted text for the HT1621 driver
//!
//! This module is behind a feature flag. Enable it in your Cargo.toml with feature flag
//! "textmode".
//!
//! It formats into a small buffer on the stack and hands the result to set_string(),
//! so numbers can be shown without an allocator:
//!
//! ```ignore
//! lcd.set_fmt(0, true, format_args!("{:.2}", volts));
//! lcd.flush()?;
//! ```
use core::fmt::{Arguments, Result as FmtResult, Write};
use core::str;

use crate::display::HT1621;

// 6 digits, each with a dot, plus a sign
const LINE_SIZE: usize = 16;

/// Fixed size text buffer, output beyond its size is dropped silently
struct Line {
    bytes: [u8; LINE_SIZE],
    len: usize,
}

impl Line {
    fn new() -> Line {
        Line {
            bytes: [0; LINE_SIZE],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        // truncation may split a multi byte character, keep the valid prefix
        match str::from_utf8(&self.bytes[..self.len]) {
            Ok(text) => text,
            Err(error) => str::from_utf8(&self.bytes[..error.valid_up_to()]).unwrap_or(""),
        }
    }
}

impl Write for Line {
    fn write_str(&mut self, s: &str) -> FmtResult {
        let free = LINE_SIZE - self.len;
        let take = s.len().min(free);
        self.bytes[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

impl<Backend> HT1621<Backend> {
    /// Format the arguments and write them with set_string()
    pub fn set_fmt(&mut self, start: u8, numeric: bool, args: Arguments) {
        let mut line = Line::new();
        // Line never fails, only a broken Display impl can
        if line.write_fmt(args).is_ok() {
            self.set_string(start, line.as_str(), numeric);
        }
    }
}
