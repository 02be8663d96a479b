//! 7-segment font of the common 6 digit HT1621 module
//!
//! The segment wiring is a property of the LCD glass and the module PCB. On the widely
//! available modules one display RAM byte holds one digit, with this bit assignment:
//!
//! ```text
//!       --A--
//!     F|     |B
//!       --G--
//!     E|     |C
//!       --D-- o DP
//!
//!     bit:  7  6  5  4  3  2  1  0
//!           DP C  B  A  D  E  G  F
//! ```
//!
//! The DP bit of the three rightmost digits drives the battery indicator on some modules.

/// decimal point
pub const SEG_DP: u8 = 0x80;
pub const SEG_A: u8 = 0x10;
pub const SEG_B: u8 = 0x20;
pub const SEG_C: u8 = 0x40;
pub const SEG_D: u8 = 0x08;
pub const SEG_E: u8 = 0x04;
pub const SEG_F: u8 = 0x01;
pub const SEG_G: u8 = 0x02;

/// Character code substituted for everything outside of [`CHARMAP`]
pub const BLANK: u8 = b' ';

const D0: u8 = SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F;
const D1: u8 = SEG_B | SEG_C;
const D2: u8 = SEG_A | SEG_B | SEG_G | SEG_E | SEG_D;
const D3: u8 = SEG_A | SEG_B | SEG_G | SEG_C | SEG_D;
const D4: u8 = SEG_F | SEG_G | SEG_B | SEG_C;
const D5: u8 = SEG_A | SEG_F | SEG_G | SEG_C | SEG_D;
const D6: u8 = SEG_A | SEG_F | SEG_G | SEG_C | SEG_D | SEG_E;
const D7: u8 = SEG_A | SEG_B | SEG_C;
const D8: u8 = 0x7f;
const D9: u8 = SEG_A | SEG_B | SEG_F | SEG_G | SEG_C | SEG_D;

const A: u8 = SEG_E | SEG_G | SEG_F | SEG_A | SEG_B | SEG_C;
const B: u8 = SEG_F | SEG_E | SEG_G | SEG_C | SEG_D;
const C: u8 = SEG_A | SEG_F | SEG_E | SEG_D;
const D: u8 = SEG_E | SEG_G | SEG_D | SEG_C | SEG_B;
const E: u8 = SEG_A | SEG_F | SEG_G | SEG_E | SEG_D;
const F: u8 = SEG_A | SEG_F | SEG_G | SEG_E;
const G: u8 = SEG_A | SEG_F | SEG_G | SEG_C | SEG_D | SEG_E;
const H: u8 = SEG_F | SEG_G | SEG_E | SEG_C | SEG_B;
const I: u8 = SEG_C;
const J: u8 = SEG_B | SEG_C | SEG_D;
const K: u8 = SEG_F | SEG_E | SEG_G | SEG_C;
const L: u8 = SEG_F | SEG_E | SEG_D;
const O: u8 = SEG_G | SEG_E | SEG_D | SEG_C;
const P: u8 = SEG_A | SEG_B | SEG_F | SEG_G | SEG_E;
const Q: u8 = D0 | SEG_DP;
const S: u8 = D5;
const T: u8 = SEG_B | SEG_G | SEG_C | SEG_D;
const X: u8 = H;
// brackets
const OPEN: u8 = SEG_A | SEG_F | SEG_E | SEG_D;
const CLOSE: u8 = SEG_A | SEG_B | SEG_C | SEG_D;

/// Segments to be switched on for every 7 bit ASCII code.
///
/// The first 16 entries repeat the hex digits so a nibble value can be shown directly.
/// Glyphs a 7-segment digit can't show are blank.
#[rustfmt::skip]
pub const CHARMAP: [u8; 128] = [
    // 0x00: hex digits
    D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, A, B, C, D, E, F,
    // 0x10
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x20: space ! " # $ % & ' ( ) * + , - . /
    0, 0, SEG_F | SEG_B, 0, 0, 0, 0, SEG_B, OPEN, CLOSE, 0, 0, SEG_DP, SEG_G, SEG_DP, 0,
    // 0x30: 0-9 : ; < = > ?
    D0, D1, D2, D3, D4, D5, D6, D7, D8, D9, 0, 0, 0, SEG_G | SEG_D, 0, 0,
    // 0x40: @ A-O
    0, A, B, C, D, E, F, G, H, I, J, K, L, 0, 0, O,
    // 0x50: P-Z [ \ ] ^ _
    P, Q, 0, S, T, SEG_F | SEG_E | SEG_D | SEG_C | SEG_B, 0, 0, X, 0, 0, OPEN, 0, CLOSE, 0, SEG_D,
    // 0x60: ` a-o
    SEG_F, A, B, C, D, E, F, G, H, I, J, K, L, 0, SEG_E | SEG_G | SEG_C, O,
    // 0x70: p-z { | } ~ DEL
    P, Q, SEG_E | SEG_G, S, T, SEG_E | SEG_D | SEG_C, 0, 0, X, 0, 0, OPEN, SEG_F | SEG_E, CLOSE, 0, 0,
];

/// Translates a character code into its segment pattern, optionally with the decimal point.
///
/// Codes beyond the table render as a blank.
pub fn glyph(code: u8, decimal_point: bool) -> u8 {
    let segments = CHARMAP
        .get(code as usize)
        .copied()
        .unwrap_or(CHARMAP[BLANK as usize]);
    if decimal_point {
        segments | SEG_DP
    } else {
        segments
    }
}
