// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use num_bigint_dig::BigUint;

use crate::{Error, Result};

/// Ordered ciphertext values, one per plaintext character.
///
/// Order defines the character order of the decrypted text and is never
/// changed. `Display` renders the values space-separated; the persisted
/// form is one value per line (see [`Ciphertext::to_lines`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ciphertext {
    values: Vec<BigUint>,
}

impl Ciphertext {
    pub fn new(values: Vec<BigUint>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[BigUint] {
        &self.values
    }

    pub fn into_values(self) -> Vec<BigUint> {
        self.values
    }

    /// Render one decimal value per line, each terminated by `\n`.
    pub fn to_lines(&self) -> String {
        self.values.iter().map(|value| format!("{value}\n")).collect()
    }

    /// Parse one decimal value per line.
    ///
    /// Blank lines are skipped and surrounding whitespace is ignored.
    /// Errors carry the 1-based line number as their position.
    pub fn from_lines(input: &str) -> Result<Self> {
        let mut values = Vec::new();
        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            values.push(parse_value(line, index + 1)?);
        }

        Ok(Self { values })
    }
}

fn parse_value(token: &str, position: usize) -> Result<BigUint> {
    BigUint::from_str(token).map_err(|_| Error::MalformedCiphertext {
        position,
        value: token.to_string(),
    })
}

impl Deref for Ciphertext {
    type Target = [BigUint];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl From<Vec<BigUint>> for Ciphertext {
    fn from(values: Vec<BigUint>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<BigUint> for Ciphertext {
    fn from_iter<I: IntoIterator<Item = BigUint>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Ciphertext {
    type Item = &'a BigUint;
    type IntoIter = std::slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.values.iter();
        if let Some(first) = values.next() {
            write!(f, "{first}")?;
            for value in values {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Ciphertext {
    type Err = Error;

    /// Accepts any whitespace-separated values, so both the line-per-value
    /// artifact and the space-joined display form parse. Errors carry the
    /// 1-based token index as their position.
    fn from_str(s: &str) -> Result<Self> {
        s.split_whitespace()
            .enumerate()
            .map(|(index, token)| parse_value(token, index + 1))
            .collect()
    }
}
