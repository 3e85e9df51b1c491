// File:    playfair.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The Playfair digraph cipher and its 5x5 key matrix.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Only the ASCII letters of a text are enciphered. They are upper-cased and
//! `J` is merged into `I`, so the 25 remaining letters fit a 5x5 matrix;
//! everything else is dropped.
//!
//! Digraph preparation uses [`FILLER`] (`X`) to split a pair of identical
//! letters and to pad a lone trailing letter. When the letter to split or pad
//! is itself an `X`, [`ALTERNATE_FILLER`] (`Q`) is used instead.

use crate::{CipherError, CipherKind, Result, alphabet};
use serde::Serialize;
use std::fmt;

/// Letter inserted between doubled letters and appended to odd-length text.
pub const FILLER: char = 'X';
/// Filler used when the letter being split or padded is [`FILLER`] itself.
pub const ALTERNATE_FILLER: char = 'Q';

/// Width and height of the matrix.
const SIZE: usize = 5;
/// Size of the full A-Z alphabet, for the coordinate lookup.
const LETTERS: usize = 26;
/// The 25-letter Playfair alphabet, without `J`.
const ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// The 5x5 letter grid derived from a key.
///
/// Built once per request with [`create_matrix`] and passed to [`encrypt`] and
/// [`decrypt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayfairMatrix {
    grid: [[char; SIZE]; SIZE],
    #[serde(skip)]
    coords: [(usize, usize); LETTERS],
}

impl PlayfairMatrix {
    /// The grid in reading order.
    #[must_use]
    pub const fn rows(&self) -> &[[char; SIZE]; SIZE] {
        &self.grid
    }

    /// Row and column of a normalized letter (`A`-`Z`, `J` shares `I`'s cell).
    fn position(&self, letter: char) -> (usize, usize) {
        alphabet::letter_index(letter).map_or((0, 0), |i| self.coords[usize::from(i)])
    }

    /// Applies the Playfair rules to one digraph. `step` is 1 to encrypt and
    /// `SIZE - 1` to decrypt.
    fn substitute(&self, first: char, second: char, step: usize) -> [char; 2] {
        let (r1, c1) = self.position(first);
        let (r2, c2) = self.position(second);
        if r1 == r2 {
            [
                self.grid[r1][(c1 + step) % SIZE],
                self.grid[r2][(c2 + step) % SIZE],
            ]
        } else if c1 == c2 {
            [
                self.grid[(r1 + step) % SIZE][c1],
                self.grid[(r2 + step) % SIZE][c2],
            ]
        } else {
            [self.grid[r1][c2], self.grid[r2][c1]]
        }
    }
}

impl fmt::Display for PlayfairMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            f.write_str(&line.join(" "))?;
        }
        Ok(())
    }
}

/// Builds the key matrix: the key's letters without repeats, then the rest
/// of the alphabet, laid out row by row.
///
/// Non-letters in the key are ignored and an empty key gives the plain
/// alphabet.
///
/// # Examples
///
/// ```
/// use cipher_core::playfair;
///
/// let matrix = playfair::create_matrix("Monarchy");
/// assert_eq!(matrix.rows()[0], ['M', 'O', 'N', 'A', 'R']);
/// assert_eq!(matrix.rows()[4], ['U', 'V', 'W', 'X', 'Z']);
/// ```
#[must_use]
pub fn create_matrix(key: &str) -> PlayfairMatrix {
    let mut letters: Vec<char> = Vec::with_capacity(SIZE * SIZE);
    for letter in normalize(key).chain(ALPHABET.chars()) {
        if !letters.contains(&letter) {
            letters.push(letter);
        }
    }

    let mut grid = [[' '; SIZE]; SIZE];
    let mut coords = [(0, 0); LETTERS];
    for (i, &letter) in letters.iter().enumerate() {
        let (row, column) = (i / SIZE, i % SIZE);
        grid[row][column] = letter;
        if let Some(index) = alphabet::letter_index(letter) {
            coords[usize::from(index)] = (row, column);
        }
    }
    if let (Some(i), Some(j)) = (alphabet::letter_index('I'), alphabet::letter_index('J')) {
        coords[usize::from(j)] = coords[usize::from(i)];
    }

    PlayfairMatrix { grid, coords }
}

/// Encrypts the letters of `plain_text` digraph by digraph.
///
/// The output is always upper case and of even length. Doubled letters are
/// split and odd text is padded as described in the module docs.
///
/// # Examples
///
/// ```
/// use cipher_core::playfair;
///
/// let matrix = playfair::create_matrix("MONARCHY");
/// // HELLO is prepared as HE LX LO.
/// assert_eq!(playfair::encrypt("hello", &matrix), "CFSUPM");
/// ```
#[must_use]
pub fn encrypt(plain_text: &str, matrix: &PlayfairMatrix) -> String {
    digraphs(plain_text)
        .into_iter()
        .flat_map(|(first, second)| matrix.substitute(first, second, 1))
        .collect()
}

/// Decrypts text produced by [`encrypt`] with a matrix built from the same key.
///
/// The result is the raw digraph stream, fillers included; use
/// [`strip_fillers`] for a display version.
///
/// # Errors
///
/// Returns [`CipherError::InvalidText`] when the letters of `cipher_text`
/// have odd length or contain a digraph of two identical letters, neither of
/// which Playfair encryption can produce.
pub fn decrypt(cipher_text: &str, matrix: &PlayfairMatrix) -> Result<String> {
    let letters: Vec<char> = normalize(cipher_text).collect();
    if letters.len() % 2 != 0 {
        return Err(CipherError::InvalidText {
            cipher: CipherKind::Playfair,
            reason: format!("expected an even number of letters, got {}", letters.len()),
        });
    }

    let mut plain_text = String::with_capacity(letters.len());
    for pair in letters.chunks_exact(2) {
        if let &[first, second] = pair {
            if first == second {
                return Err(CipherError::InvalidText {
                    cipher: CipherKind::Playfair,
                    reason: format!("digraph '{first}{second}' repeats a letter"),
                });
            }
            plain_text.extend(matrix.substitute(first, second, SIZE - 1));
        }
    }
    Ok(plain_text)
}

/// Removes the fillers [`encrypt`] most likely inserted: a filler sitting
/// between two identical letters at the end of a digraph, and a filler
/// padding the last digraph.
///
/// The filler is [`FILLER`] (`X`) after any letter other than `X`, and
/// [`ALTERNATE_FILLER`] (`Q`) after an `X`, so `XQXQ` strips back to `XX`.
///
/// This is a guess. A genuine `X` or `Q` in one of those places is removed too.
///
/// ```
/// use cipher_core::playfair;
///
/// assert_eq!(playfair::strip_fillers("HELXLO"), "HELLO");
/// assert_eq!(playfair::strip_fillers("CATX"), "CAT");
/// assert_eq!(playfair::strip_fillers("XQXQ"), "XX");
/// ```
#[must_use]
pub fn strip_fillers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            if i % 2 == 0 {
                return true;
            }
            let previous = chars[i - 1];
            if c != filler_for(previous) {
                return true;
            }
            match chars.get(i + 1) {
                Some(&next) => next != previous,
                None => false,
            }
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Upper-cased ASCII letters of `text`, with `J` folded into `I`.
fn normalize(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            upper => upper,
        })
}

const fn filler_for(letter: char) -> char {
    if letter == FILLER {
        ALTERNATE_FILLER
    } else {
        FILLER
    }
}

/// Splits the normalized text into digraphs, separating doubled letters
/// and padding a lone last letter.
fn digraphs(text: &str) -> Vec<(char, char)> {
    let letters: Vec<char> = normalize(text).collect();
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                pairs.push((first, second));
                i += 2;
            }
            _ => {
                pairs.push((first, filler_for(first)));
                i += 1;
            }
        }
    }
    pairs
}
