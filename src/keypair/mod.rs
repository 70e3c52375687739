// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) mod util;

use std::fmt;
use std::str::FromStr;

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::util::{find_prime_factors, mod_inverse};

/// Public half of the key: the modulus `n` and exponent `e`.
///
/// Formats as the two-line public key artifact:
///
/// ```text
/// n=3233
/// e=7
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) e: BigUint,
}

impl PublicKey {
    /// Construct a public key from its components.
    ///
    /// Both values must be non-zero.
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        if n.is_zero() {
            return Err(Error::MalformedPublicKey("modulus must be non-zero".into()));
        }
        if e.is_zero() {
            return Err(Error::MalformedPublicKey("exponent must be non-zero".into()));
        }

        Ok(Self { n, e })
    }

    /// Return the public modulus `n`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return the public exponent `e`.
    pub fn e(&self) -> &BigUint {
        &self.e
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n={}", self.n)?;
        write!(f, "e={}", self.e)
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());

        let n = parse_field(lines.next(), "n")?;
        let e = parse_field(lines.next(), "e")?;

        if let Some(extra) = lines.next() {
            return Err(Error::MalformedPublicKey(format!("unexpected line {extra:?}")));
        }

        Self::new(n, e)
    }
}

fn parse_field(line: Option<&str>, name: &str) -> Result<BigUint> {
    let line = line.ok_or_else(|| Error::MalformedPublicKey(format!("missing `{name}=` line")))?;

    let value = line
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| Error::MalformedPublicKey(format!("expected `{name}=`, got {line:?}")))?;

    BigUint::from_str(value.trim())
        .map_err(|_| Error::MalformedPublicKey(format!("`{name}` is not a decimal integer: {value:?}")))
}

/// Complete key material `(p, q, n, Phi, e, d)`.
///
/// Values are immutable once derived. Recovery produces a fresh
/// `KeyMaterial` rather than mutating an existing one. The prime factors,
/// totient and private exponent are zeroized on drop.
#[allow(missing_debug_implementations)]
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "expose-secret", derive(Debug))]
pub struct KeyMaterial {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,
    pub(crate) p: BigUint,
    pub(crate) q: BigUint,

    /// Euler totient `(p - 1)(q - 1)`.
    pub(crate) phi: BigUint,

    /// Private exponent, `d·e ≡ 1 (mod phi)`.
    pub(crate) d: BigUint,
}

impl KeyMaterial {
    /// Derive key material from two primes using the smallest valid exponent.
    ///
    /// Primality of `p` and `q` is not verified here.
    pub fn derive(p: BigUint, q: BigUint) -> Result<Self> {
        KeyMaterialBuilder::new(p, q).build()
    }

    /// Derive key material from two primes and a caller-chosen exponent.
    ///
    /// Fails with [`Error::NotInvertible`] if `e` is not coprime to Phi.
    pub fn with_exponent(p: BigUint, q: BigUint, e: BigUint) -> Result<Self> {
        KeyMaterialBuilder::new(p, q).exponent(e).build()
    }

    /// Return the public key `(n, e)`.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Return the public modulus `n`.
    pub fn n(&self) -> &BigUint {
        self.public_key.n()
    }

    /// Return the public exponent `e`.
    pub fn e(&self) -> &BigUint {
        self.public_key.e()
    }

    /// Return the prime factor `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Return the prime factor `q`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Return the Euler totient `(p - 1)(q - 1)`.
    pub fn phi(&self) -> &BigUint {
        &self.phi
    }

    /// Return the private exponent `d`.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    fn from_parts(p: BigUint, q: BigUint, e: BigUint) -> Result<Self> {
        let n = &p * &q;
        let phi = totient(&p, &q);
        let d = mod_inverse(&e, &phi)?;
        let public_key = PublicKey::new(n, e)?;

        Ok(Self { public_key, p, q, phi, d })
    }
}

/// Builder for deriving key material with configurable exponent selection.
#[derive(Debug)]
pub struct KeyMaterialBuilder {
    p: BigUint,
    q: BigUint,
    exponent: Option<BigUint>,
    search_limit: Option<BigUint>,
}

impl KeyMaterialBuilder {
    /// Create a builder for the prime pair `(p, q)`.
    pub fn new(p: BigUint, q: BigUint) -> Self {
        Self { p, q, exponent: None, search_limit: None }
    }

    /// Use a fixed public exponent instead of searching for one.
    pub fn exponent(mut self, e: BigUint) -> Self {
        self.exponent = Some(e);
        self
    }

    /// Cap the public exponent search at `limit` (inclusive).
    ///
    /// Without a cap the search stops at `phi + 3`.
    pub fn exponent_search_limit(mut self, limit: BigUint) -> Self {
        self.search_limit = Some(limit);
        self
    }

    /// Derive the key material.
    pub fn build(self) -> Result<KeyMaterial> {
        let two = BigUint::from(2u32);
        for prime in [&self.p, &self.q] {
            if prime < &two {
                return Err(Error::InvalidPrime { value: prime.clone() });
            }
        }

        let e = match self.exponent {
            Some(e) => e,
            None => {
                let phi = totient(&self.p, &self.q);
                let limit = self
                    .search_limit
                    .unwrap_or_else(|| util::default_search_limit(&phi));
                util::find_public_exponent(&phi, &limit)?
            }
        };

        let key = KeyMaterial::from_parts(self.p, self.q, e)?;
        log::debug!("derived key material: n={}, e={}", key.n(), key.e());

        Ok(key)
    }
}

/// Recompute the private key from the public modulus and exponent alone.
///
/// Factors `n` by trial division, then rebuilds Phi and `d` around the
/// unchanged `e`. The cost grows with the smallest prime factor of `n`.
///
/// ## Error
///
/// Returns [`Error::FactorizationFailed`] when `n` is not a product of
/// two primes, and [`Error::NotInvertible`] when `e` is not coprime to the
/// recovered totient.
pub fn recover_private_key(public_key: &PublicKey) -> Result<KeyMaterial> {
    log::debug!("recovering private key by factoring n={}", public_key.n());

    let (p, q) = find_prime_factors(public_key.n())
        .ok_or_else(|| Error::FactorizationFailed { modulus: public_key.n().clone() })?;

    KeyMaterial::from_parts(p, q, public_key.e().clone())
}

/// `(p - 1)(q - 1)`; callers guarantee `p, q >= 1`.
fn totient(p: &BigUint, q: &BigUint) -> BigUint {
    (p - BigUint::one()) * (q - BigUint::one())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn derive_textbook_pair() {
        let key = KeyMaterial::derive(big(61), big(53)).unwrap();

        assert_eq!(key.n(), &big(3233));
        assert_eq!(key.phi(), &big(3120));
        assert_eq!(key.e(), &big(7));
        assert_eq!(key.d(), &big(1783));
    }

    #[test]
    fn with_exponent_reproduces_textbook_values() {
        let key = KeyMaterial::with_exponent(big(61), big(53), big(17)).unwrap();

        assert_eq!(key.n(), &big(3233));
        assert_eq!(key.e(), &big(17));
        assert_eq!(key.d(), &big(2753));
    }

    #[test]
    fn with_exponent_rejects_shared_factor() {
        let result = KeyMaterial::with_exponent(big(61), big(53), big(5));
        assert!(matches!(result, Err(Error::NotInvertible)));
    }

    #[test]
    fn key_relation_holds() {
        let pairs = [(3u64, 5u64), (5, 7), (11, 13), (61, 53), (101, 113), (251, 257)];
        for (p, q) in pairs {
            let key = KeyMaterial::derive(big(p), big(q)).unwrap();
            assert_eq!((key.e() * key.d()) % key.phi(), big(1), "p = {p}, q = {q}");
        }
    }

    #[test]
    fn rejects_primes_below_two() {
        assert!(matches!(
            KeyMaterial::derive(big(0), big(53)),
            Err(Error::InvalidPrime { value }) if value == big(0)
        ));
        assert!(matches!(
            KeyMaterial::derive(big(61), big(1)),
            Err(Error::InvalidPrime { value }) if value == big(1)
        ));
    }

    #[test]
    fn prime_two_is_accepted() {
        // phi = 1·2 = 2, e = 3, d = 3⁻¹ mod 2 = 1
        let key = KeyMaterial::derive(big(2), big(3)).unwrap();
        assert_eq!(key.e(), &big(3));
        assert_eq!(key.d(), &big(1));

        // phi = 1, d falls back to 0
        let key = KeyMaterial::derive(big(2), big(2)).unwrap();
        assert_eq!(key.e(), &big(3));
        assert_eq!(key.d(), &big(0));
    }

    #[test]
    fn search_limit_is_honoured() {
        let result = KeyMaterialBuilder::new(big(61), big(53))
            .exponent_search_limit(big(5))
            .build();
        assert!(matches!(result, Err(Error::ExponentNotFound { .. })));
    }

    #[test]
    fn recover_matches_derived_key() {
        let key = KeyMaterial::derive(big(61), big(53)).unwrap();
        let recovered = recover_private_key(key.public_key()).unwrap();

        assert_eq!(recovered.p(), &big(53));
        assert_eq!(recovered.q(), &big(61));
        assert_eq!(recovered.phi(), key.phi());
        assert_eq!(recovered.d(), key.d());
        assert_eq!(recovered.public_key(), key.public_key());
    }

    #[test]
    fn recover_fails_for_prime_modulus() {
        let public_key = PublicKey::new(big(97), big(7)).unwrap();
        let result = recover_private_key(&public_key);
        assert!(matches!(result, Err(Error::FactorizationFailed { modulus }) if modulus == big(97)));
    }

    #[test]
    fn public_key_artifact_format() {
        let key = KeyMaterial::derive(big(61), big(53)).unwrap();
        assert_eq!(key.public_key().to_string(), "n=3233\ne=7");
    }

    #[test]
    fn public_key_parse() {
        let parsed: PublicKey = "n=3233\ne=17\n".parse().unwrap();
        assert_eq!(parsed, PublicKey::new(big(3233), big(17)).unwrap());

        let crlf: PublicKey = "n=3233\r\ne=17\r\n".parse().unwrap();
        assert_eq!(crlf, parsed);
    }

    #[test]
    fn public_key_parse_rejects_malformed() {
        for input in ["", "n=3233", "e=17\nn=3233", "n=abc\ne=17", "n=3233\ne=17\nd=2753", "n=0\ne=17"] {
            let result = input.parse::<PublicKey>();
            assert!(matches!(result, Err(Error::MalformedPublicKey(_))), "input {input:?}");
        }
    }
}
