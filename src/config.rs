//! Panel specific bring-up settings

use crate::instructions::{Bias, ClockSource, Commons};

/// How the HT1621 is wired to its LCD glass and clock.
///
/// The defaults fit the common 6 digit modules: internal RC oscillator, 4 commons,
/// 1/3 bias. Other glass may need different settings, see the data sheet of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub clock: ClockSource,
    pub bias: Bias,
    pub commons: Commons,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            clock: ClockSource::Rc256k,
            bias: Bias::Third,
            commons: Commons::Four,
        }
    }
}
