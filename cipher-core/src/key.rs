// File:    key.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Turns keys typed by a user into the values the ciphers take.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.


use crate::{CipherError, CipherKind, Result, alphabet};

/// Parses an integer key, ignoring surrounding whitespace.
///
/// A leading `+` or `-` is accepted. Range checks are left to the cipher, so
/// `-3` parses here and is rejected later by e.g. the Rail Fence.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyFormat`] if `raw` is not a base-10
/// integer, and [`CipherError::InvalidKeyValue`] for `cipher` if it is one
/// that does not fit in an `i64`.
pub fn parse_integer(cipher: CipherKind, raw: &str) -> Result<i64> {
    if split_sign(raw).is_none() {
        return Err(format_error(raw));
    }
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CipherError::InvalidKeyValue {
            cipher,
            reason: format!("{} is out of range", raw.trim()),
        })
}

/// Parses a Caesar shift of any length, reduced modulo 26.
///
/// The result keeps the sign of the key and lies in `-25..=25`, so it shifts
/// exactly like the full integer would.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyFormat`] if `raw` is not a base-10 integer.
pub fn parse_shift(raw: &str) -> Result<i64> {
    let (negative, digits) = split_sign(raw).ok_or_else(|| format_error(raw))?;
    let modulus = i64::from(alphabet::LEN);
    let shift = digits
        .bytes()
        .fold(0, |acc, digit| (acc * 10 + i64::from(digit - b'0')) % modulus);
    Ok(if negative { -shift } else { shift })
}

/// Trims a keyword key. Keyword validation belongs to each cipher.
#[must_use]
pub fn parse_keyword(raw: &str) -> &str {
    raw.trim()
}

/// Splits a trimmed key into its sign and a non-empty run of ASCII digits.
fn split_sign(raw: &str) -> Option<(bool, &str)> {
    let trimmed = raw.trim();
    let (negative, digits) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else {
        (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
    };
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some((negative, digits))
}

fn format_error(raw: &str) -> CipherError {
    CipherError::InvalidKeyFormat {
        key: raw.to_owned(),
        expected: "an integer",
    }
}
