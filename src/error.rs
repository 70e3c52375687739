// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use num_bigint_dig::BigUint;

/// Errors that can occur during key derivation, encryption and persistence.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid prime: {value} is below 2")]
    InvalidPrime { value: BigUint },

    #[error("No odd public exponent coprime to the totient up to {limit}")]
    ExponentNotFound { limit: BigUint },

    #[error("Modular inverse does not exist")]
    NotInvertible,

    #[error("Modulus {modulus} has no prime-pair factorization")]
    FactorizationFailed { modulus: BigUint },

    #[error("Decrypted value {value} is not a Unicode scalar value")]
    CodePointOutOfRange { value: BigUint },

    #[error("Malformed public key: {0}")]
    MalformedPublicKey(String),

    /// `position` is the 1-based line number for the line-per-value form
    /// and the 1-based token index for the space-joined form.
    #[error("Malformed ciphertext value at position {position}: {value:?}")]
    MalformedCiphertext { position: usize, value: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
