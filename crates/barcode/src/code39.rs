//! Code 39 module patterns.
//!
//! Every character is nine elements (bar, space, bar, ... bar), three of them
//! wide. Wide elements are drawn three modules wide, narrow ones one module,
//! and characters are separated by one narrow space.

use locker_core::{CardError, CardResult};

pub(crate) const MAX_LEN: usize = 80;

const WIDE: usize = 3;

/// (character, element widths as bits: 1 = wide, first element in bit 8).
const TABLE: [(char, u16); 44] = [
    ('0', 0b000110100),
    ('1', 0b100100001),
    ('2', 0b001100001),
    ('3', 0b101100000),
    ('4', 0b000110001),
    ('5', 0b100110000),
    ('6', 0b001110000),
    ('7', 0b000100101),
    ('8', 0b100100100),
    ('9', 0b001100100),
    ('A', 0b100001001),
    ('B', 0b001001001),
    ('C', 0b101001000),
    ('D', 0b000011001),
    ('E', 0b100011000),
    ('F', 0b001011000),
    ('G', 0b000001101),
    ('H', 0b100001100),
    ('I', 0b001001100),
    ('J', 0b000011100),
    ('K', 0b100000011),
    ('L', 0b001000011),
    ('M', 0b101000010),
    ('N', 0b000010011),
    ('O', 0b100010010),
    ('P', 0b001010010),
    ('Q', 0b000000111),
    ('R', 0b100000110),
    ('S', 0b001000110),
    ('T', 0b000010110),
    ('U', 0b110000001),
    ('V', 0b011000001),
    ('W', 0b111000000),
    ('X', 0b010010001),
    ('Y', 0b110010000),
    ('Z', 0b011010000),
    ('-', 0b010000101),
    ('.', 0b110000100),
    (' ', 0b011000100),
    ('$', 0b010101000),
    ('/', 0b010100010),
    ('+', 0b010001010),
    ('%', 0b000101010),
    ('*', 0b010010100),
];

const START_STOP: char = '*';

/// Upper-case `code` and check every character is encodable.
pub(crate) fn normalize(code: &str) -> CardResult<String> {
    let upper = code.trim().to_ascii_uppercase();

    if upper.is_empty() {
        return Err(CardError::invalid_code("empty Code 39 payload"));
    }
    if upper.chars().count() > MAX_LEN {
        return Err(CardError::invalid_code(format!(
            "Code 39 payload longer than {MAX_LEN} characters"
        )));
    }
    if let Some(bad) = upper.chars().find(|&c| c == START_STOP || pattern(c).is_none()) {
        return Err(CardError::invalid_code(format!(
            "character {bad:?} cannot be encoded in Code 39"
        )));
    }
    Ok(upper)
}

/// Module pattern for an already-normalized payload, start/stop included.
pub(crate) fn modules(payload: &str) -> Vec<bool> {
    let framed = core::iter::once(START_STOP)
        .chain(payload.chars())
        .chain(core::iter::once(START_STOP));

    let mut modules = Vec::new();
    for (i, c) in framed.enumerate() {
        if i > 0 {
            modules.push(false);
        }
        // normalize() has already rejected anything outside the table.
        let Some(widths) = pattern(c) else { continue };
        for element in 0..9 {
            let bar = element % 2 == 0;
            let wide = widths & (1 << (8 - element)) != 0;
            let n = if wide { WIDE } else { 1 };
            modules.extend(core::iter::repeat_n(bar, n));
        }
    }
    modules
}

fn pattern(c: char) -> Option<u16> {
    TABLE.iter().find(|(ch, _)| *ch == c).map(|(_, w)| *w)
}
