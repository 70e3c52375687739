// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Textbook RSA over text
//!
//! Derives an RSA key from two caller-supplied primes and encrypts text one
//! character at a time by modular exponentiation of each code point.
//! Decryption recovers the private key from the public modulus alone by
//! trial-division factoring.
//!
//! ## Security
//!
//! None. There is no padding and no randomness, so equal characters produce
//! equal ciphertext values, and the key is recovered by design in
//! `O(min(p, q))` steps. Use only demonstration-sized primes.
//!
//! ## Example
//!
//! ```rust
//! use charsa::{DecryptText, EncryptText, KeyMaterial, recover_private_key};
//! use num_bigint_dig::BigUint;
//!
//! let key = KeyMaterial::derive(BigUint::from(61u32), BigUint::from(53u32))?;
//! assert_eq!(key.public_key().to_string(), "n=3233\ne=7");
//!
//! let ciphertext = key.encrypt_text("Hi");
//! assert_eq!(ciphertext.to_string(), "1087 3020");
//!
//! let recovered = recover_private_key(key.public_key())?;
//! assert_eq!(recovered.decrypt_text(&ciphertext)?, "Hi");
//! # Ok::<(), charsa::Error>(())
//! ```

mod ciphertext;
mod config;
mod context;
mod crypto;
mod error;
mod keypair;
mod store;
pub mod util;

pub use ciphertext::*;
pub use config::*;
pub use context::*;
pub use crypto::*;
pub use error::*;
pub use keypair::{KeyMaterial, KeyMaterialBuilder, PublicKey, recover_private_key};
pub use store::*;
