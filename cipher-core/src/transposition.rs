// File:    transposition.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The columnar Transposition cipher keyed by a column count.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The text is laid out row by row in a grid of `key` columns. The cells left
//! over in the last row are padding: they hold no character and are skipped
//! when a column is read out, so the ciphertext has exactly as many
//! characters as the plaintext and no filler ever needs stripping.
//!
//! ```text
//! HELLOWORLD, key 3      H E L
//!                        L O W      columns: HLOD EOR LWL
//!                        O R L
//!                        D . .      cipher text: HLODEORLWL
//! ```

use crate::{CipherError, CipherKind, Result};

/// Reads the grid out column by column.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyValue`] when `key` is not positive, or
/// when it is larger than a non-empty text.
pub fn encrypt(plain_text: &str, key: i64) -> Result<String> {
    let chars: Vec<char> = plain_text.chars().collect();
    let columns = column_count(key, chars.len())?;

    Ok((0..columns)
        .flat_map(|column| chars.iter().skip(column).step_by(columns))
        .collect())
}

/// Rebuilds the columns from text produced by [`encrypt`] and reads the grid
/// back row by row.
///
/// The first `len % key` columns (all of them when the grid is full) are one
/// row taller than the others.
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn decrypt(cipher_text: &str, key: i64) -> Result<String> {
    let chars: Vec<char> = cipher_text.chars().collect();
    let columns = column_count(key, chars.len())?;
    if chars.is_empty() {
        return Ok(String::new());
    }

    let rows = chars.len().div_ceil(columns);
    let tall_columns = match chars.len() % columns {
        0 => columns,
        rem => rem,
    };

    let mut grid: Vec<&[char]> = Vec::with_capacity(columns);
    let mut start = 0;
    for column in 0..columns {
        let height = if column < tall_columns { rows } else { rows - 1 };
        grid.push(&chars[start..start + height]);
        start += height;
    }

    let mut plain_text = String::with_capacity(chars.len());
    for row in 0..rows {
        plain_text.extend(grid.iter().filter_map(|column| column.get(row)));
    }
    Ok(plain_text)
}

fn column_count(key: i64, text_len: usize) -> Result<usize> {
    let invalid = |reason: String| CipherError::InvalidKeyValue {
        cipher: CipherKind::Transposition,
        reason,
    };

    let columns = usize::try_from(key)
        .ok()
        .filter(|&c| c >= 1)
        .ok_or_else(|| invalid(format!("the key must be a positive integer, got {key}")))?;
    if text_len > 0 && columns > text_len {
        return Err(invalid(format!(
            "the key ({columns}) cannot exceed the text length ({text_len})"
        )));
    }
    Ok(columns)
}
