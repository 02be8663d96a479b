//! Text on the 7-segment digits
//!
//! The 6 digit modules are wired "backwards": the leftmost digit is row 5 and the
//! rightmost digit is row 0. set_string() takes care of that, set_char() works on raw rows.

use core::convert::TryFrom;

use crate::{
    display::HT1621,
    font::{glyph, BLANK},
    DIGITS,
};

impl<Backend> HT1621<Backend> {
    /// Put the segments of a character into the row buffer, optionally with decimal point.
    ///
    /// Characters the font doesn't know are shown as a blank, rows out of range are ignored.
    pub fn set_char(&mut self, row: u8, character: u8, decimal_point: bool) {
        self.set_row(row, glyph(character, decimal_point));
    }

    /// Write a string into the digits, starting at digit `start` (0 is the leftmost digit).
    ///
    /// Digits after the end of the string keep their content. Writing stops at the rightmost
    /// digit, or at a NUL character. Every character takes one digit, characters outside of
    /// 7 bit ASCII are shown as a blank.
    ///
    /// With `numeric` set, a '.' doesn't take a digit of its own but lights the decimal point
    /// of the digit before it, so "12.5" fits into 3 digits. A leading '.' is shown as "0.".
    /// A second '.' in a row is dropped.
    pub fn set_string(&mut self, start: u8, text: &str, numeric: bool) {
        let mut slot = start;
        // row and character of the digit written last, and whether it got its dot already
        let mut last: Option<(u8, u8, bool)> = None;

        for c in text.chars() {
            if c == '\0' {
                break;
            }
            let character = u8::try_from(c).unwrap_or(BLANK);

            if numeric && character == b'.' {
                match last {
                    None if slot < DIGITS => {
                        let row = DIGITS - 1 - slot;
                        self.set_char(row, b'0', true);
                        last = Some((row, b'0', true));
                        slot += 1;
                    }
                    Some((row, previous, false)) => {
                        self.set_char(row, previous, true);
                        last = Some((row, previous, true));
                    }
                    _ => {}
                }
                continue;
            }

            if slot >= DIGITS {
                break;
            }
            let row = DIGITS - 1 - slot;
            self.set_char(row, character, false);
            last = Some((row, character, false));
            slot += 1;
        }
    }
}
