//! Byte dispatch tables.
//!
//! Every byte that can start a token maps to a coarse [`Class`] through a
//! single table lookup. Hex digit values live in a second table so that
//! `\uXXXX` decoding is one lookup per digit.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Class {
    Invalid,
    Whitespace,
    ArrayOpen,
    ArrayClose,
    ObjectOpen,
    ObjectClose,
    Colon,
    Comma,
    Quote,
    Number,
    True,
    False,
    Null,
}

static CLASSES: [Class; 256] = {
    let mut table = [Class::Invalid; 256];
    table[b' ' as usize] = Class::Whitespace;
    table[b'\t' as usize] = Class::Whitespace;
    table[b'\n' as usize] = Class::Whitespace;
    table[b'\r' as usize] = Class::Whitespace;
    table[b'[' as usize] = Class::ArrayOpen;
    table[b']' as usize] = Class::ArrayClose;
    table[b'{' as usize] = Class::ObjectOpen;
    table[b'}' as usize] = Class::ObjectClose;
    table[b':' as usize] = Class::Colon;
    table[b',' as usize] = Class::Comma;
    table[b'"' as usize] = Class::Quote;
    table[b'-' as usize] = Class::Number;
    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = Class::Number;
        digit += 1;
    }
    table[b't' as usize] = Class::True;
    table[b'f' as usize] = Class::False;
    table[b'n' as usize] = Class::Null;
    table
};

/// Marks bytes that are not hex digits in [`HEX_VALUES`].
pub(crate) const NOT_HEX: u8 = 0xFF;

pub(crate) static HEX_VALUES: [u8; 256] = {
    let mut table = [NOT_HEX; 256];
    let mut i = 0u8;
    while i < 10 {
        table[(b'0' + i) as usize] = i;
        i += 1;
    }
    let mut i = 0u8;
    while i < 6 {
        table[(b'a' + i) as usize] = 10 + i;
        table[(b'A' + i) as usize] = 10 + i;
        i += 1;
    }
    table
};

#[inline(always)]
pub(crate) fn classify(byte: u8) -> Class {
    CLASSES[byte as usize]
}
