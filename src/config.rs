// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_PUBLIC_KEY_PATH: &str = "publicKey.txt";
pub const DEFAULT_CIPHERTEXT_PATH: &str = "encryptedText.txt";

/// Artifact locations and key derivation settings.
///
/// Every field is optional in the TOML form:
///
/// ```toml
/// public_key_path = "publicKey.txt"
/// ciphertext_path = "encryptedText.txt"
/// exponent_search_limit = 65537
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub public_key_path: PathBuf,
    pub ciphertext_path: PathBuf,

    /// Inclusive cap on the public exponent search. `None` means `phi + 3`.
    pub exponent_search_limit: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_key_path: PathBuf::from(DEFAULT_PUBLIC_KEY_PATH),
            ciphertext_path: PathBuf::from(DEFAULT_CIPHERTEXT_PATH),
            exponent_search_limit: None,
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
