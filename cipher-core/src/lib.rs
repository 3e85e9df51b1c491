// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The main library crate for cipher-core, exposing the five classic ciphers and the request dispatch used by the front-ends.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Classic Cipher Core Library
//!
//! This library provides five classic pen-and-paper ciphers (Caesar, Vigenère,
//! Rail Fence, Playfair and columnar Transposition) as independent modules of
//! pure functions, plus a small request layer ([`run`]) that parses a raw key
//! and dispatches to the right cipher.
//!
//! None of these ciphers offer any security; they exist for teaching.
//!
//! ```
//! use cipher_core::{CipherKind, Mode, caesar, run};
//!
//! assert_eq!(caesar::encrypt("Hello, World!", 3), "Khoor, Zruog!");
//! let plain = run(CipherKind::RailFence, Mode::Decrypt, "WECRLTEERDSOEEFEAOCAIVDEN", "3").unwrap();
//! assert_eq!(plain, "WEAREDISCOVEREDFLEEATONCE");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod alphabet;

/// The Caesar shift cipher.
pub mod caesar;
/// Error types shared by every cipher.
pub mod error;
/// Parsing of raw, user-supplied keys.
pub mod key;
/// The Playfair digraph cipher and its 5x5 key matrix.
pub mod playfair;
/// The Rail Fence zig-zag transposition.
pub mod rail_fence;
/// The columnar Transposition cipher.
pub mod transposition;
/// The Vigenère keyword cipher.
pub mod vigenere;

pub use error::{CipherError, Result};

/// Identifies one of the supported ciphers.
///
/// The serialized form is the lower-case slug used in URLs and on the command
/// line (`caesar`, `vigenere`, `railfence`, `playfair`, `transposition`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Fixed alphabet shift.
    Caesar,
    /// Keyword-driven alphabet shift.
    Vigenere,
    /// Zig-zag transposition over a number of rails.
    RailFence,
    /// Digraph substitution through a 5x5 matrix.
    Playfair,
    /// Column-order transposition.
    Transposition,
}

/// The shape of key a cipher expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// A signed integer, e.g. a shift or a number of rails.
    Integer,
    /// A keyword.
    Text,
}

impl CipherKind {
    /// Every supported cipher, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Caesar,
        Self::Vigenere,
        Self::RailFence,
        Self::Playfair,
        Self::Transposition,
    ];

    /// The URL and command-line name of the cipher.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Vigenere => "vigenere",
            Self::RailFence => "railfence",
            Self::Playfair => "playfair",
            Self::Transposition => "transposition",
        }
    }

    /// The human readable name of the cipher.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Caesar => "Caesar",
            Self::Vigenere => "Vigenère",
            Self::RailFence => "Rail Fence",
            Self::Playfair => "Playfair",
            Self::Transposition => "Transposition",
        }
    }

    /// Whether the cipher takes an integer or a keyword.
    #[must_use]
    pub const fn key_kind(self) -> KeyKind {
        match self {
            Self::Caesar | Self::RailFence | Self::Transposition => KeyKind::Integer,
            Self::Vigenere | Self::Playfair => KeyKind::Text,
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CipherError::UnknownCipher {
                name: s.to_owned(),
            })
    }
}

/// Direction of a cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl Mode {
    /// The label shown next to a result.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Self::Encrypt),
            "decrypt" => Ok(Self::Decrypt),
            _ => Err(CipherError::UnknownMode { name: s.to_owned() }),
        }
    }
}

/// Runs one cipher operation on `text` with a key exactly as typed by a user.
///
/// Integer keys are parsed from `raw_key`, with Caesar shifts of any length
/// reduced modulo 26; keyword keys have surrounding whitespace trimmed. Playfair builds its matrix for this call only, and a
/// Playfair decryption has its filler letters stripped for display
/// (see [`playfair::strip_fillers`]).
///
/// # Errors
///
/// Returns [`CipherError::InvalidKeyFormat`] when an integer key does not
/// parse, [`CipherError::InvalidKeyValue`] when a Rail Fence or Transposition
/// key does not fit in an `i64`, and whatever error the selected cipher
/// reports for its key or text.
pub fn run(kind: CipherKind, mode: Mode, text: &str, raw_key: &str) -> Result<String> {
    debug!(
        "{} {} request over {} characters",
        kind.slug(),
        mode,
        text.chars().count()
    );

    match kind {
        CipherKind::Caesar => {
            let shift = key::parse_shift(raw_key)?;
            Ok(match mode {
                Mode::Encrypt => caesar::encrypt(text, shift),
                Mode::Decrypt => caesar::decrypt(text, shift),
            })
        }
        CipherKind::Vigenere => {
            let keyword = key::parse_keyword(raw_key);
            match mode {
                Mode::Encrypt => vigenere::encrypt(text, keyword),
                Mode::Decrypt => vigenere::decrypt(text, keyword),
            }
        }
        CipherKind::RailFence => {
            let rails = key::parse_integer(kind, raw_key)?;
            match mode {
                Mode::Encrypt => rail_fence::encrypt(text, rails),
                Mode::Decrypt => rail_fence::decrypt(text, rails),
            }
        }
        CipherKind::Playfair => {
            let matrix = playfair::create_matrix(key::parse_keyword(raw_key));
            match mode {
                Mode::Encrypt => Ok(playfair::encrypt(text, &matrix)),
                Mode::Decrypt => {
                    playfair::decrypt(text, &matrix).map(|plain| playfair::strip_fillers(&plain))
                }
            }
        }
        CipherKind::Transposition => {
            let columns = key::parse_integer(kind, raw_key)?;
            match mode {
                Mode::Encrypt => transposition::encrypt(text, columns),
                Mode::Decrypt => transposition::decrypt(text, columns),
            }
        }
    }
}
