// File:    rail_fence.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The Rail Fence cipher, a zig-zag transposition over a number of rails.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::{CipherError, CipherKind, Result};
use log::trace;

/// Writes the text along a zig-zag of `rails` rows and reads it row by row.
///
/// Every character takes part, including spaces and punctuation, so the
/// ciphertext is a permutation of the input.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyValue`] when `rails` is below 2.
///
/// # Examples
///
/// ```
/// use cipher_core::rail_fence;
///
/// let cipher_text = rail_fence::encrypt("WEAREDISCOVEREDFLEEATONCE", 3).unwrap();
/// assert_eq!(cipher_text, "WECRLTEERDSOEEFEAOCAIVDEN");
/// ```
pub fn encrypt(plain_text: &str, rails: i64) -> Result<String> {
    let chars: Vec<char> = plain_text.chars().collect();
    let rails = rail_count(rails, chars.len())?;

    let mut rows = vec![String::new(); rails];
    for (&c, row) in chars.iter().zip(zigzag(rails)) {
        rows[row].push(c);
    }
    Ok(rows.concat())
}

/// Decrypts text produced by [`encrypt`] with the same number of rails.
///
/// The zig-zag row of every position is recomputed, the ciphertext is cut
/// into rails of the matching lengths, and the rails are read back in
/// zig-zag order.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyValue`] when `rails` is below 2.
pub fn decrypt(cipher_text: &str, rails: i64) -> Result<String> {
    let chars: Vec<char> = cipher_text.chars().collect();
    let rails = rail_count(rails, chars.len())?;
    let pattern: Vec<usize> = zigzag(rails).take(chars.len()).collect();

    let mut lengths = vec![0usize; rails];
    for &row in &pattern {
        lengths[row] += 1;
    }

    let mut rows = Vec::with_capacity(rails);
    let mut start = 0;
    for length in lengths {
        rows.push(chars[start..start + length].iter());
        start += length;
    }

    Ok(pattern
        .iter()
        .filter_map(|&row| rows[row].next())
        .collect())
}

/// Validates the rail count and caps it at the text length: past that point
/// every character sits on its own rail and extra rails stay empty.
fn rail_count(rails: i64, text_len: usize) -> Result<usize> {
    let rails = usize::try_from(rails)
        .ok()
        .filter(|&r| r >= 2)
        .ok_or_else(|| CipherError::InvalidKeyValue {
            cipher: CipherKind::RailFence,
            reason: format!("the number of rails must be at least 2, got {rails}"),
        })?;
    let effective = rails.min(text_len.max(2));
    trace!("rail fence over {effective} rails");
    Ok(effective)
}

/// Row index of each successive position: 0, 1, .., rails-1, rails-2, .., 1, 0, ..
fn zigzag(rails: usize) -> impl Iterator<Item = usize> {
    let period = 2 * (rails - 1);
    (0..).map(move |i| {
        let phase = i % period;
        if phase < rails { phase } else { period - phase }
    })
}
