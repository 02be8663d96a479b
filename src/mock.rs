//! Test doubles: recording pins and a recording backend

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::backend::HT1621Backend;
use crate::frame::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Cs = 0,
    Wr = 1,
    Data = 2,
}

#[derive(Default)]
struct State {
    levels: [Option<bool>; 3],
    start: [Option<bool>; 3],
    events: Vec<(Line, bool)>,
}

/// Shared log of every level change on the three bus lines
#[derive(Clone, Default)]
pub struct Bus(Rc<RefCell<State>>);

pub struct MockPin {
    line: Line,
    bus: Bus,
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.bus.set(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.bus.set(self.line, true);
        Ok(())
    }
}

impl Bus {
    pub fn new() -> Bus {
        Bus::default()
    }

    pub fn pin(&self, line: Line) -> MockPin {
        MockPin { line, bus: self.clone() }
    }

    fn set(&self, line: Line, high: bool) {
        let mut state = self.0.borrow_mut();
        state.levels[line as usize] = Some(high);
        state.events.push((line, high));
    }

    pub fn level(&self, line: Line) -> Option<bool> {
        self.0.borrow().levels[line as usize]
    }

    /// forget all events so far, current levels become the starting point
    pub fn reset(&self) {
        let mut state = self.0.borrow_mut();
        state.start = state.levels;
        state.events.clear();
    }

    pub fn events(&self) -> Vec<(Line, bool)> {
        self.0.borrow().events.clone()
    }

    // replays the log, calling `edge` with (cs, data) on every rising WR edge
    // and `cs_change` on every CS transition
    fn replay(
        &self,
        mut edge: impl FnMut(Option<bool>, Option<bool>),
        mut cs_change: impl FnMut(bool),
    ) {
        let state = self.0.borrow();
        let mut levels = state.start;
        for &(line, high) in state.events.iter() {
            let before = levels[line as usize];
            levels[line as usize] = Some(high);
            match line {
                Line::Wr if high && before == Some(false) => {
                    edge(levels[Line::Cs as usize], levels[Line::Data as usize])
                }
                Line::Cs if before != Some(high) => cs_change(high),
                _ => {}
            }
        }
    }

    /// DATA level at every rising WR edge
    pub fn latched(&self) -> Vec<bool> {
        let mut bits = Vec::new();
        self.replay(|_, data| bits.push(data == Some(true)), |_| {});
        bits
    }

    /// Bits latched between each CS low/high pair
    pub fn frames(&self) -> Vec<Vec<bool>> {
        let frames = RefCell::new(Vec::<Vec<bool>>::new());
        self.replay(
            |cs, data| {
                if cs == Some(false) {
                    if let Some(frame) = frames.borrow_mut().last_mut() {
                        frame.push(data == Some(true));
                    }
                }
            },
            |high| {
                if !high {
                    frames.borrow_mut().push(Vec::new());
                }
            },
        );
        frames.into_inner()
    }
}

pub fn bits_to_u32(bits: &[bool]) -> u32 {
    bits.iter().fold(0, |acc, &bit| acc << 1 | bit as u32)
}

/// Delay that only counts how often and how long it was asked to wait
#[derive(Default)]
pub struct CountingDelay {
    pub calls: u32,
    pub total_us: u32,
}

impl DelayUs<u8> for CountingDelay {
    fn delay_us(&mut self, us: u8) {
        self.calls += 1;
        self.total_us += us as u32;
    }
}

/// Backend keeping every frame instead of sending it
#[derive(Default)]
pub struct FrameLog {
    pub frames: Vec<Frame>,
}

impl HT1621Backend for FrameLog {
    type Error = Infallible;

    fn write_frame(&mut self, frame: &Frame) -> Result<(), Infallible> {
        self.frames.push(*frame);
        Ok(())
    }
}

impl FrameLog {
    /// command bytes of all command frames, in order
    pub fn commands(&self) -> Vec<u8> {
        self.frames
            .iter()
            .filter(|frame| frame.fields()[0].bits == crate::instructions::Mode::Command.byte())
            .map(|frame| frame.fields()[1].bits)
            .collect()
    }
}
