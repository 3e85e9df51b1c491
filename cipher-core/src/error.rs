// File:    error.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The error taxonomy reported by the ciphers and the request layer.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::CipherKind;
use thiserror::Error;

/// Everything that can go wrong while running a cipher.
///
/// All variants are input errors: nothing here is transient, so callers
/// should report them rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key could not be parsed into the type the cipher needs.
    #[error("invalid key '{key}': expected {expected}")]
    InvalidKeyFormat {
        /// The key as it was supplied.
        key: String,
        /// What the cipher expected instead.
        expected: &'static str,
    },

    /// The key parsed but is outside the range the cipher accepts.
    #[error("invalid {cipher} key: {reason}")]
    InvalidKeyValue {
        /// The cipher that rejected the key.
        cipher: CipherKind,
        /// Why the key was rejected.
        reason: String,
    },

    /// The cipher needs a keyword and got an empty one.
    #[error("the {cipher} cipher needs a non-empty key")]
    EmptyKey {
        /// The cipher that rejected the key.
        cipher: CipherKind,
    },

    /// The text cannot have been produced by this cipher.
    #[error("invalid {cipher} text: {reason}")]
    InvalidText {
        /// The cipher that rejected the text.
        cipher: CipherKind,
        /// Why the text was rejected.
        reason: String,
    },

    /// No cipher goes by this name.
    #[error("unknown cipher '{name}'")]
    UnknownCipher {
        /// The name that was looked up.
        name: String,
    },

    /// The operation is neither `encrypt` nor `decrypt`.
    #[error("unknown mode '{name}', expected 'encrypt' or 'decrypt'")]
    UnknownMode {
        /// The name that was looked up.
        name: String,
    },
}

/// A `Result` alias with [`CipherError`] as the error type.
pub type Result<T> = std::result::Result<T, CipherError>;
