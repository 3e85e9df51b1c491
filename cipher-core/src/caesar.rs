// File:    caesar.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The Caesar cipher, a fixed shift over the ASCII alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet;
use log::trace;

/// Encrypts by shifting every ASCII letter forward by `key` places.
///
/// The key is reduced modulo 26, so negative keys and keys above 26 are
/// accepted. Case is preserved and every character that is not an ASCII
/// letter is copied through unchanged.
///
/// # Examples
///
/// ```
/// use cipher_core::caesar;
///
/// assert_eq!(caesar::encrypt("XYZ", 3), "ABC");
/// assert_eq!(caesar::encrypt("abc", -1), "zab");
/// ```
#[must_use]
pub fn encrypt(plain_text: &str, key: i64) -> String {
    shift_text(plain_text, normalize(key))
}

/// Decrypts text produced by [`encrypt`] with the same key.
#[must_use]
pub fn decrypt(cipher_text: &str, key: i64) -> String {
    shift_text(cipher_text, alphabet::inverse(normalize(key)))
}

/// Reduces a key of any size into `0..26`.
fn normalize(key: i64) -> u8 {
    u8::try_from(key.rem_euclid(i64::from(alphabet::LEN))).unwrap_or_default()
}

fn shift_text(text: &str, shift: u8) -> String {
    trace!("caesar shift of {shift}");
    text.chars().map(|c| alphabet::shift_letter(c, shift)).collect()
}
