// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File artifacts: the public key and the ciphertext sequence.
//!
//! Both are plain text. The public key is `n=<n>` then `e=<e>`; the
//! ciphertext is one decimal value per line, in character order. Writes
//! replace any existing file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::ciphertext::Ciphertext;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::keypair::PublicKey;

/// Explicit artifact locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    public_key_path: PathBuf,
    ciphertext_path: PathBuf,
}

impl Store {
    pub fn new<P: Into<PathBuf>, C: Into<PathBuf>>(public_key_path: P, ciphertext_path: C) -> Self {
        Self {
            public_key_path: public_key_path.into(),
            ciphertext_path: ciphertext_path.into(),
        }
    }

    /// Place both artifacts under `dir` with their default file names.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(crate::config::DEFAULT_PUBLIC_KEY_PATH),
            dir.join(crate::config::DEFAULT_CIPHERTEXT_PATH),
        )
    }

    pub fn public_key_path(&self) -> &Path {
        &self.public_key_path
    }

    pub fn ciphertext_path(&self) -> &Path {
        &self.ciphertext_path
    }

    pub fn write_public_key(&self, public_key: &PublicKey) -> Result<()> {
        write(&self.public_key_path, &format!("{public_key}\n"))?;
        log::debug!("wrote public key to {}", self.public_key_path.display());
        Ok(())
    }

    pub fn read_public_key(&self) -> Result<PublicKey> {
        read(&self.public_key_path)?.parse()
    }

    pub fn write_ciphertext(&self, ciphertext: &Ciphertext) -> Result<()> {
        write(&self.ciphertext_path, &ciphertext.to_lines())?;
        log::debug!(
            "wrote {} ciphertext values to {}",
            ciphertext.len(),
            self.ciphertext_path.display()
        );
        Ok(())
    }

    pub fn read_ciphertext(&self) -> Result<Ciphertext> {
        Ciphertext::from_lines(&read(&self.ciphertext_path)?)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Store {
    fn from(config: &Config) -> Self {
        Self::new(config.public_key_path.clone(), config.ciphertext_path.clone())
    }
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}
