use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2;
use ht1621::{Config, HT1621GpioBackend, HT1621, ROWS};
use std::convert::Infallible;
use std::thread;
use std::time::Duration;

pub struct DummyOutputPin;

impl v2::OutputPin for DummyOutputPin {
    type Error = Infallible;
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub struct SleepDelay;

impl DelayMs<u16> for SleepDelay {
    fn delay_ms(&mut self, ms: u16) {
        thread::sleep(Duration::from_millis(ms.into()));
    }
}

fn main() {
    let mut delay = SleepDelay;
    let bus = HT1621GpioBackend::new(DummyOutputPin, DummyOutputPin, DummyOutputPin)
        .expect("Infallible cannot fail");
    let mut lcd = HT1621::new(bus, Config::default());
    lcd.init().expect("Infallible cannot fail");

    lcd.set_string(0, "Test", false);
    lcd.flush().expect("Infallible cannot fail");

    // blink
    for n in 0..40 {
        if n % 2 == 0 {
            lcd.set_off().expect("Infallible cannot fail");
        } else {
            lcd.set_on().expect("Infallible cannot fail");
        }
        delay.delay_ms(1000);
    }

    lcd.set_fmt(0, true, format_args!("{:.3}", 12.3456));
    lcd.flush().expect("Infallible cannot fail");
    delay.delay_ms(1000);

    // walk through every segment to find out how the glass is wired
    for row in 0..ROWS as u8 {
        for bit in 0..8 {
            lcd.set_row(row, 1 << bit);
            lcd.flush().expect("Infallible cannot fail");
            delay.delay_ms(1000);
        }
    }
}
