//! Swapped-nibble BCD digits (Global Title address information)
//!
//! Each octet carries two digits, the first in the low nibble. An odd digit
//! count leaves a filler in the high nibble of the last octet.

use crate::errors::{Result, SccpError};

/// Filler nibble for the last octet of an odd-length digit string
const FILLER: u8 = 0x0F;

/// Render swapped BCD octets as a digit string.
///
/// With `odd` set the trailing filler nibble is dropped. Nibbles above 9 are
/// rendered as lowercase hex.
pub fn swapped_bytes_to_string(raw: &[u8], odd: bool) -> String {
    let mut result = String::with_capacity(raw.len() * 2);

    for &byte in raw {
        result.push(nibble_char(byte & 0x0F));
        result.push(nibble_char(byte >> 4));
    }

    if odd {
        result.pop();
    }

    result
}

/// Pack a digit string into swapped BCD octets.
///
/// Returns the octets and whether the digit count was odd.
pub fn string_to_swapped_bytes(digits: &str) -> Result<(Vec<u8>, bool)> {
    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(SccpError::InvalidDigit(c)))
        .collect::<Result<Vec<u8>>>()?;

    let packed = nibbles
        .chunks(2)
        .map(|pair| {
            let high = pair.get(1).copied().unwrap_or(FILLER);
            pair[0] | (high << 4)
        })
        .collect();

    Ok((packed, nibbles.len() % 2 == 1))
}

fn nibble_char(n: u8) -> char {
    // n is masked to a nibble by every caller
    char::from_digit(n as u32, 16).unwrap_or('?')
}
