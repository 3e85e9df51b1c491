// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Helpers for the 26-letter ASCII alphabet shared by the shift ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

/// Number of letters in the alphabet.
pub(crate) const LEN: u8 = 26;

/// Position of an ASCII letter in the alphabet (A=0), ignoring case.
pub(crate) fn letter_index(c: char) -> Option<u8> {
    let byte = u8::try_from(c).ok()?;
    byte.is_ascii_alphabetic().then(|| byte.to_ascii_uppercase() - b'A')
}

/// Shifts an ASCII letter forward by `shift` places, keeping its case.
/// Anything else is returned untouched. `shift` must be below [`LEN`].
pub(crate) fn shift_letter(c: char, shift: u8) -> char {
    let Ok(byte) = u8::try_from(c) else {
        return c;
    };
    let base = match byte {
        b'A'..=b'Z' => b'A',
        b'a'..=b'z' => b'a',
        _ => return c,
    };
    char::from(base + (byte - base + shift) % LEN)
}

/// The shift that undoes `shift`.
pub(crate) const fn inverse(shift: u8) -> u8 {
    (LEN - shift % LEN) % LEN
}
