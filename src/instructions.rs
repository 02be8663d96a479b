//! # Module defining the instruction set of the HT1621
//!
//! All commands are implemented as enums and most arguments as well.
//! The source code is written to resemble the data sheet as close as possible.
//!
//! Every command is 9 bits on the wire, following the 3 bit command mode tag `100`.
//! The 9th bit is a "don't care" bit for all commands, so a command is represented as
//! the first 8 bits in a byte and the driver clocks out one extra padding bit.
//!
//! ## Bias and commons (BIAS)
//! The HT1621 drives multiplexed LCD glass with 2, 3 or 4 common (backplane) lines and
//! either a 1/2 or 1/3 bias voltage. Both are properties of the glass, not of the chip.
//! The cheap 6 digit modules found everywhere use 4 commons at 1/3 bias, which is the
//! default in [`Config`](crate::config::Config).
//!
//! ## Clock source
//! The chip runs from its on-chip RC oscillator (256 kHz), an external 32 kHz crystal or
//! an external 256 kHz clock. Modules without a crystal must use the RC oscillator.
//!
//! ## Tone, timer and watchdog
//! The HT1621 can drive a buzzer (tone output), has a time base generator and a watchdog
//! timer feeding the IRQ output. Most modules leave those pins unconnected, they are only
//! included for completeness.

/// The 3 bit mode tag in front of every frame, stored in the upper three bits of a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// `100`, a command follows
    Command = 0b1000_0000,
    /// `101`, an address and data to write into display RAM follow
    Write = 0b1010_0000,
    /// `110`, an address follows and the chip answers on its RD line
    Read = 0b1100_0000,
}

impl Mode {
    /// Returns the mode tag, left aligned in a byte, ready for an MSB first transfer.
    pub fn byte(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// System clock source of the HT1621
pub enum ClockSource {
    /// external 32.768 kHz crystal on OSCI/OSCO
    Xtal32k = 0b0001_0100,
    /// on-chip RC oscillator, the power-on default
    Rc256k = 0b0001_1000,
    /// external 256 kHz clock on OSCI
    Ext256k = 0b0001_1100,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// LCD bias voltage level
pub enum Bias {
    /// 1/2 bias
    Half = 0,
    /// 1/3 bias
    Third = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Number of common lines (backplanes) of the LCD glass
pub enum Commons {
    /// 2 commons
    Two = 0b00,
    /// 3 commons
    Three = 0b01,
    /// 4 commons
    Four = 0b10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Frequency of the tone (buzzer) output
pub enum ToneFrequency {
    /// 4 kHz
    Tone4k = 0b0100_0000,
    /// 2 kHz
    Tone2k = 0b0110_0000,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Output frequency of the time base generator and watchdog timer, in Hz
pub enum TimeBase {
    F1 = 0,
    F2 = 1,
    F4 = 2,
    F8 = 3,
    F16 = 4,
    F32 = 5,
    F64 = 6,
    F128 = 7,
}

/// HT1621 command set, see data sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// turn off system oscillator and LCD bias generator
    SysDis,
    /// turn on system oscillator
    SysEn,
    /// turn off LCD bias generator
    LcdOff,
    /// turn on LCD bias generator
    LcdOn,
    /// disable time base output
    TimerDis,
    /// disable watchdog timer time-out flag output
    WdtDis,
    /// enable time base output
    TimerEn,
    /// enable watchdog timer time-out flag output
    WdtEn,
    /// turn off tone output
    ToneOff,
    /// turn on tone output
    ToneOn,
    /// clear the contents of the time base generator
    ClearTimer,
    /// clear the contents of the watchdog stage
    ClearWdt,
    /// select the system clock source
    Clock(ClockSource),
    /// select bias level and number of commons
    Bias(Bias, Commons),
    /// select tone frequency
    Tone(ToneFrequency),
    /// disable IRQ output
    IrqDis,
    /// enable IRQ output
    IrqEn,
    /// time base / watchdog clock output frequency
    TimeBase(TimeBase),
    /// test mode, for manufacturer use only
    Test,
    /// normal mode
    Normal,
}

// Use full binary presentation instead of hex, to look the same as data sheet
impl Command {
    /// Returns the command as the first 8 of its 9 bits, ready to be sent MSB first
    pub fn byte(self) -> u8 {
        use Command::*;

        match self {
            SysDis => 0b0000_0000,
            SysEn => 0b0000_0001,
            LcdOff => 0b0000_0010,
            LcdOn => 0b0000_0011,
            TimerDis => 0b0000_0100,
            WdtDis => 0b0000_0101,
            TimerEn => 0b0000_0110,
            WdtEn => 0b0000_0111,
            ToneOff => 0b0000_1000,
            ToneOn => 0b0000_1001,
            ClearTimer => 0b0000_1100,
            ClearWdt => 0b0000_1110,
            Clock(source) => source as u8,
            Bias(bias, commons) => 0b0010_0000 | (commons as u8) << 2 | bias as u8,
            Tone(frequency) => frequency as u8,
            IrqDis => 0b1000_0000,
            IrqEn => 0b1000_1000,
            TimeBase(frequency) => 0b1010_0000 | frequency as u8,
            Test => 0b1110_0000,
            Normal => 0b1110_0011,
        }
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> u8 {
        command.byte()
    }
}

/// A prelude for convenience, it pulls all enums into scope.
pub mod prelude {
    pub use super::{
        Bias, ClockSource, ClockSource::*, Command, Commons, Mode, TimeBase, ToneFrequency,
        ToneFrequency::*,
    };
}
