//! Hex helpers for APDU literals and frame dumps in logs.
//!
//! Output is uppercase, matching how ATRs and status words are usually
//! written. Parsing accepts the separators people paste from reader tools.

use std::fmt::Write;

use crate::{Error, Result};

/// `&[0x90, 0x00]` -> `"9000"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // write! into a String cannot fail
        let _ = write!(s, "{:02X}", b);
        s
    })
}

/// `&[0x3B, 0x00]` -> `"3B 00"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02X}", b);
    }
    s
}

/// Parse hex into bytes. Whitespace, `:` and `-` between digits are ignored,
/// so `"00 A4 04 00"`, `"00:a4:04:00"` and `"00A40400"` are equivalent.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':' && *b != b'-')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(Error::InvalidHex(format!(
            "odd number of hex digits ({})",
            digits.len()
        )));
    }

    digits
        .chunks_exact(2)
        .map(|pair| -> Result<u8> { Ok((nibble(pair[0])? << 4) | nibble(pair[1])?) })
        .collect()
}

fn nibble(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::InvalidHex(format!("invalid digit '{}'", c as char))),
    }
}
