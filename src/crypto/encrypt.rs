// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

use super::{Encrypt, EncryptText};
use crate::ciphertext::Ciphertext;
use crate::keypair::{KeyMaterial, PublicKey};

impl Encrypt for PublicKey {
    fn encrypt(&self, message_unit: &BigUint) -> BigUint {
        if message_unit >= &self.n {
            // wraps modulo n and will not decrypt back to the same value
            log::warn!("message unit {} is not below modulus {}", message_unit, self.n);
        }

        // c = m^e mod n
        message_unit.modpow(&self.e, &self.n)
    }
}

impl EncryptText for PublicKey {}

impl Encrypt for KeyMaterial {
    fn encrypt(&self, message_unit: &BigUint) -> BigUint {
        self.public_key.encrypt(message_unit)
    }
}

impl EncryptText for KeyMaterial {}

/// Collects per-character ciphertext values in text order.
pub(super) fn encrypt_chars<E: Encrypt + ?Sized>(key: &E, text: &str) -> Ciphertext {
    text.chars().map(|c| key.encrypt_char(c)).collect()
}
