// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::ToPrimitive;

use super::{Decrypt, DecryptText};
use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::KeyMaterial;

impl Decrypt for KeyMaterial {
    fn decrypt(&self, ciphertext_unit: &BigUint) -> BigUint {
        // m = c^d mod n
        ciphertext_unit.modpow(&self.d, self.public_key.n())
    }
}

impl DecryptText for KeyMaterial {}

/// Narrows a decrypted value to a `char`.
///
/// ## Error
///
/// Returns [`Error::CodePointOutOfRange`] for values above `u32::MAX`,
/// surrogates, and anything past `char::MAX`.
pub(super) fn to_char(value: BigUint) -> Result<char> {
    value
        .to_u32()
        .and_then(char::from_u32)
        .ok_or(Error::CodePointOutOfRange { value })
}

/// Decrypts every value in order and concatenates the characters.
pub(super) fn decrypt_chars<D: Decrypt + ?Sized>(key: &D, ciphertext: &Ciphertext) -> Result<String> {
    ciphertext.iter().map(|c| key.decrypt_char(c)).collect()
}
