//! # Main driver for the HT1621
//!
//! The HT1621 has 32 x 4 bits of display RAM, addressed in nibbles. The 6 digit modules
//! use two nibbles per digit, so this driver keeps a mirror of 16 "rows", one byte per
//! row, and writes row `n` to nibble address `2 * n`.
//!
//! The chip can't be read back (the modules don't even route the RD pin), so the mirror
//! is the only source of truth. All the "set" functions only change the mirror, use
//! HT1621.flush() to send it to the display.
//!
//! Typically you want to look into the following functions:
//!  - HT1621.new() and HT1621.init() to create and bring up a driver instance
//!  - HT1621.set_string() / HT1621.set_char() to put text in the mirror
//!  - HT1621.flush() to make it visible
//!  - HT1621.set_on() / HT1621.set_off() to blank the display without losing the content

use crate::{
    backend::HT1621Backend,
    config::Config,
    frame::Frame,
    instructions::prelude::*,
    ROWS,
};

/// main struct for state keeping of the HT1621 driver
#[derive(Debug)]
pub struct HT1621<Backend> {
    backend: Backend,
    config: Config,
    rows: [u8; ROWS],
}

impl<Backend> HT1621<Backend>
where
    Backend: HT1621Backend,
{
    /// Create a new instance of the HT1621 driver with an empty row buffer.
    ///
    /// Nothing is sent yet, call init() to bring up the chip.
    pub fn new(backend: Backend, config: Config) -> HT1621<Backend> {
        HT1621 {
            backend,
            config,
            rows: [0; ROWS],
        }
    }

    /// Bring up the chip: system oscillator, clock source, bias and finally the LCD output.
    ///
    /// The LCD output must come last, driving the glass before bias and clock are set is
    /// undefined. The row buffer is not sent.
    pub fn init(&mut self) -> Result<(), Backend::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ht1621: init with {}", self.config);

        self.send_command(Command::SysEn)?;
        self.send_command(Command::Clock(self.config.clock))?;
        self.send_command(Command::Bias(self.config.bias, self.config.commons))?;
        self.send_command(Command::LcdOn)
    }

    /// Send a single command to the HT1621.
    ///
    /// Takes a Command or a raw command byte.
    pub fn send_command<C: Into<u8>>(&mut self, command: C) -> Result<(), Backend::Error> {
        self.backend.write_frame(&Frame::command(command.into()))
    }

    /// Send one byte to display RAM, bypassing the row buffer.
    ///
    /// The address is a nibble address and isn't checked.
    pub fn send_data(&mut self, address: u8, value: u8, mode: Mode) -> Result<(), Backend::Error> {
        self.backend.write_frame(&Frame::data(mode, address, value))
    }

    /// Transfers the complete row buffer to the HT1621
    pub fn flush(&mut self) -> Result<(), Backend::Error> {
        for row in 0..ROWS {
            let value = self.rows[row];
            self.send_data(row as u8 * 2, value, Mode::Write)?;
        }
        Ok(())
    }

    /// Turn the LCD output on, the display RAM is kept
    pub fn set_on(&mut self) -> Result<(), Backend::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ht1621: lcd on");

        self.send_command(Command::LcdOn)
    }

    /// Turn the LCD output off, the display RAM is kept
    pub fn set_off(&mut self) -> Result<(), Backend::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("ht1621: lcd off");

        self.send_command(Command::LcdOff)
    }

    /// Start or stop the system oscillator. Disabled also turns off the LCD bias generator.
    pub fn set_system(&mut self, enabled: bool) -> Result<(), Backend::Error> {
        if enabled {
            self.send_command(Command::SysEn)
        } else {
            self.send_command(Command::SysDis)
        }
    }

    /// Enable or disable the tone (buzzer) output
    pub fn set_tone(&mut self, enabled: bool) -> Result<(), Backend::Error> {
        if enabled {
            self.send_command(Command::ToneOn)
        } else {
            self.send_command(Command::ToneOff)
        }
    }

    pub fn set_tone_frequency(&mut self, frequency: ToneFrequency) -> Result<(), Backend::Error> {
        self.send_command(Command::Tone(frequency))
    }
}

impl<Backend> HT1621<Backend> {
    /// Set the segments of one row in the buffer.
    ///
    /// Rows outside of 0..16 are silently ignored.
    pub fn set_row(&mut self, row: u8, data: u8) {
        if let Some(slot) = self.rows.get_mut(row as usize) {
            *slot = data;
        }
    }

    /// Segments of one row in the buffer, None when out of range
    pub fn row(&self, row: u8) -> Option<u8> {
        self.rows.get(row as usize).copied()
    }

    pub fn rows(&self) -> &[u8; ROWS] {
        &self.rows
    }

    /// Clear the row buffer. Doesn't touch the display until the next flush().
    pub fn clear(&mut self) {
        self.rows = [0; ROWS];
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives back the backend, e.g. to get the pins back.
    pub fn release(self) -> Backend {
        self.backend
    }
}
