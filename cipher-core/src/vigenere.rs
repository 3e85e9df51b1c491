// File:    vigenere.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The Vigenère cipher, a shift driven by a repeating keyword.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The keyword is cycled over the *letters* of the text only: spaces, digits
//! and punctuation are copied through and do not consume a keyword letter.
//! Encryption and decryption follow the same rule, so any text round-trips.

use crate::{CipherError, CipherKind, Result, alphabet};

/// Encrypts each ASCII letter by adding the alphabet position of the current
/// keyword letter (A=0). Case of the text is kept; case of the keyword is
/// ignored.
///
/// # Errors
///
/// Returns [`CipherError::EmptyKey`] for an empty keyword and
/// [`CipherError::InvalidKeyValue`] if the keyword contains anything other
/// than ASCII letters.
///
/// # Examples
///
/// ```
/// use cipher_core::vigenere;
///
/// assert_eq!(vigenere::encrypt("ATTACK AT DAWN", "lemon").unwrap(), "LXFOPV EF RNHR");
/// ```
pub fn encrypt(plain_text: &str, keyword: &str) -> Result<String> {
    let shifts = keyword_shifts(keyword)?;
    Ok(apply(plain_text, &shifts))
}

/// Decrypts text produced by [`encrypt`] with the same keyword.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn decrypt(cipher_text: &str, keyword: &str) -> Result<String> {
    let shifts: Vec<u8> = keyword_shifts(keyword)?
        .into_iter()
        .map(alphabet::inverse)
        .collect();
    Ok(apply(cipher_text, &shifts))
}

fn keyword_shifts(keyword: &str) -> Result<Vec<u8>> {
    if keyword.is_empty() {
        return Err(CipherError::EmptyKey {
            cipher: CipherKind::Vigenere,
        });
    }
    keyword
        .chars()
        .map(|c| {
            alphabet::letter_index(c).ok_or_else(|| CipherError::InvalidKeyValue {
                cipher: CipherKind::Vigenere,
                reason: format!("keyword may only contain letters A-Z, found '{c}'"),
            })
        })
        .collect()
}

fn apply(text: &str, shifts: &[u8]) -> String {
    let mut cursor = shifts.iter().copied().cycle();
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                alphabet::shift_letter(c, cursor.next().unwrap_or_default())
            } else {
                c
            }
        })
        .collect()
}
