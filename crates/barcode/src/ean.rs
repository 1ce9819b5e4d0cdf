//! EAN-13 / EAN-8 module patterns (UPC-A is EAN-13 with a leading zero).

use locker_core::{CardError, CardResult};

/// Left-hand odd parity ("L") patterns, 7 modules per digit.
const L_CODES: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, 0b0110001, 0b0101111, 0b0111011,
    0b0110111, 0b0001011,
];

/// Parity of the six left digits of an EAN-13, selected by the first digit.
/// A set bit means even parity ("G"), read from the most significant of 6 bits.
const FIRST_DIGIT_PARITY: [u8; 10] = [
    0b000000, 0b001011, 0b001101, 0b001110, 0b010011, 0b011001, 0b011100, 0b010101, 0b010110,
    0b011010,
];

const GUARD: [bool; 3] = [true, false, true];
const CENTER: [bool; 5] = [false, true, false, true, false];

pub(crate) const EAN13_MODULES: usize = 95;
pub(crate) const EAN8_MODULES: usize = 67;

/// Parse a digit string, completing or checking its trailing check digit.
///
/// `data_len` is the number of payload digits; the input may carry exactly
/// `data_len` digits (check digit appended) or `data_len + 1` (verified).
pub(crate) fn complete(code: &str, data_len: usize) -> CardResult<Vec<u8>> {
    let mut digits = code
        .trim()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| CardError::invalid_code(format!("non-digit '{c}' in {code:?}")))
        })
        .collect::<CardResult<Vec<u8>>>()?;

    if digits.len() == data_len {
        digits.push(check_digit(&digits));
        return Ok(digits);
    }

    if digits.len() != data_len + 1 {
        return Err(CardError::invalid_code(format!(
            "expected {} or {} digits, got {}",
            data_len,
            data_len + 1,
            digits.len()
        )));
    }

    let expected = check_digit(&digits[..data_len]);
    let actual = digits[data_len];
    if expected != actual {
        return Err(CardError::invalid_code(format!(
            "check digit mismatch in {code:?}: expected {expected}, got {actual}"
        )));
    }
    Ok(digits)
}

/// Modulo-10 check digit; weights 3,1,3,... from the rightmost data digit.
pub(crate) fn check_digit(data: &[u8]) -> u8 {
    let sum: u32 = data
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Module pattern for a complete 13-digit EAN.
pub(crate) fn ean13_modules(digits: &[u8]) -> Vec<bool> {
    debug_assert_eq!(digits.len(), 13);

    let parity = FIRST_DIGIT_PARITY[usize::from(digits[0])];
    let mut modules = Vec::with_capacity(EAN13_MODULES);

    modules.extend(GUARD);
    for (i, &d) in digits[1..7].iter().enumerate() {
        let even = parity & (1 << (5 - i)) != 0;
        push_pattern(&mut modules, left_code(d, even));
    }
    modules.extend(CENTER);
    for &d in &digits[7..] {
        push_pattern(&mut modules, right_code(d));
    }
    modules.extend(GUARD);

    modules
}

/// Module pattern for a complete 8-digit EAN.
pub(crate) fn ean8_modules(digits: &[u8]) -> Vec<bool> {
    debug_assert_eq!(digits.len(), 8);

    let mut modules = Vec::with_capacity(EAN8_MODULES);
    modules.extend(GUARD);
    for &d in &digits[..4] {
        push_pattern(&mut modules, left_code(d, false));
    }
    modules.extend(CENTER);
    for &d in &digits[4..] {
        push_pattern(&mut modules, right_code(d));
    }
    modules.extend(GUARD);

    modules
}

fn left_code(digit: u8, even: bool) -> u8 {
    if even {
        // G is R mirrored.
        reverse7(right_code(digit))
    } else {
        L_CODES[usize::from(digit)]
    }
}

fn right_code(digit: u8) -> u8 {
    !L_CODES[usize::from(digit)] & 0x7f
}

fn reverse7(bits: u8) -> u8 {
    (0..7).fold(0, |acc, i| acc | (((bits >> i) & 1) << (6 - i)))
}

fn push_pattern(modules: &mut Vec<bool>, bits: u8) {
    modules.extend((0..7).rev().map(|i| bits & (1 << i) != 0));
}
