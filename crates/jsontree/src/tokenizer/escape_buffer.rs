//! Accumulator for the four hex digits of a `\uXXXX` escape.
//!
//! The [`UnicodeEscapeBuffer`] takes one byte at a time because the digits
//! of an escape may straddle two reads from the byte source. It yields a
//! UTF-16 code unit, not a `char`: surrogate pairing is the tokenizer's
//! job, and a lone surrogate must still be reported so it can be replaced.

use super::class::{HEX_VALUES, NOT_HEX};

/// Outcome of feeding one byte to a [`UnicodeEscapeBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HexStep {
    /// The byte was a hex digit; more digits are needed.
    Pending,
    /// The byte was the fourth hex digit.
    Unit(u32),
    /// The byte is not a hex digit and was not accumulated.
    NotHex,
}

#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u32,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.acc = 0;
        self.len = 0;
    }

    /// Feeds a single byte. The buffer resets itself after yielding a unit
    /// and after rejecting a byte.
    pub fn feed(&mut self, byte: u8) -> HexStep {
        let digit = HEX_VALUES[byte as usize];
        if digit == NOT_HEX {
            self.reset();
            return HexStep::NotHex;
        }

        self.acc = (self.acc << 4) | u32::from(digit);
        self.len += 1;
        if self.len < 4 {
            return HexStep::Pending;
        }

        let unit = self.acc;
        self.reset();
        HexStep::Unit(unit)
    }
}

pub(crate) fn is_surrogate(unit: u32) -> bool {
    (0xD800..=0xDFFF).contains(&unit)
}

pub(crate) fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combines a high and a low surrogate into the code point they encode.
pub(crate) fn combine_surrogates(high: u32, low: u32) -> u32 {
    (((high - 0xD800) << 10) | (low - 0xDC00)) + 0x1_0000
}
