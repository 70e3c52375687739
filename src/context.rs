// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::config::Config;
use crate::crypto::{DecryptText, EncryptText};
use crate::error::Result;
use crate::keypair::{KeyMaterial, KeyMaterialBuilder, recover_private_key};
use crate::store::Store;

/// Key material bound to its file artifacts.
///
/// Construction derives the key and writes the public key artifact.
/// [`RsaContext::decrypt_text`] does not trust the cached private values:
/// it factors `n` again and replaces the current key with the recovered one.
#[allow(missing_debug_implementations)]
pub struct RsaContext {
    key: KeyMaterial,
    store: Store,
}

impl RsaContext {
    /// Derive a key from `(p, q)` and write `n`, `e` to the public key artifact.
    pub fn new(p: BigUint, q: BigUint, store: Store) -> Result<Self> {
        Self::with_builder(KeyMaterialBuilder::new(p, q), store)
    }

    /// Like [`RsaContext::new`], taking artifact paths and the exponent
    /// search cap from `config`.
    pub fn from_config(p: BigUint, q: BigUint, config: &Config) -> Result<Self> {
        let mut builder = KeyMaterialBuilder::new(p, q);
        if let Some(limit) = config.exponent_search_limit {
            builder = builder.exponent_search_limit(BigUint::from(limit));
        }
        Self::with_builder(builder, Store::from(config))
    }

    /// Derive key material with a prepared builder.
    pub fn with_builder(builder: KeyMaterialBuilder, store: Store) -> Result<Self> {
        let key = builder.build()?;
        store.write_public_key(key.public_key())?;
        Ok(Self { key, store })
    }

    /// The key currently held, replaced by every successful decryption.
    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Encrypt `text` character by character and overwrite the ciphertext
    /// artifact. The returned value displays as the space-joined values.
    pub fn encrypt_text(&self, text: &str) -> Result<Ciphertext> {
        let ciphertext = self.key.encrypt_text(text);
        self.store.write_ciphertext(&ciphertext)?;
        Ok(ciphertext)
    }

    /// Recover the private key from `(n, e)`, then decrypt the stored
    /// ciphertext artifact.
    ///
    /// On failure the current key is left unchanged.
    pub fn decrypt_text(&mut self) -> Result<String> {
        let recovered = recover_private_key(self.key.public_key())?;
        let ciphertext = self.store.read_ciphertext()?;
        let text = recovered.decrypt_text(&ciphertext)?;

        self.key = recovered;
        Ok(text)
    }
}
