// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Number theory over arbitrary-precision integers.
//!
//! Everything here is exact and deterministic. Primality and factoring use
//! plain trial division, which is only viable for demonstration-sized moduli.

use num_bigint_dig::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};

use crate::{Error, Result};

/// Trial-division primality test.
///
/// Returns `false` below 2, otherwise checks every divisor `i` with
/// `i * i <= number`.
pub fn is_prime(number: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if number < &two {
        return false;
    }

    let mut i = two;
    while &i * &i <= *number {
        if (number % &i).is_zero() {
            return false;
        }
        i += 1u32;
    }
    true
}

/// Greatest common divisor by the Euclidean algorithm.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Computes a⁻¹ mod `modulus` with the extended Euclidean algorithm.
///
/// A modulus of 1 yields 0. The result is normalized into `[0, modulus)`.
///
/// ## Error
///
/// Returns [`Error::NotInvertible`] when `modulus` is zero or
/// `gcd(a, modulus) != 1`.
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::NotInvertible);
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }
    if !gcd(a, modulus).is_one() {
        return Err(Error::NotInvertible);
    }

    let m0 = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let mut a = BigInt::from_biguint(Sign::Plus, a.clone());
    let mut m = m0.clone();
    let mut x = BigInt::one();
    let mut y = BigInt::zero();

    // Invariant: a ≡ x·a₀ and m ≡ y·a₀ (mod m₀)
    while a > BigInt::one() {
        let q = &a / &m;
        let r = &a % &m;
        a = std::mem::replace(&mut m, r);
        let next_y = &x - &q * &y;
        x = std::mem::replace(&mut y, next_y);
    }

    if x.is_negative() {
        x += &m0;
    }

    x.to_biguint().map(|x| x % modulus).ok_or(Error::NotInvertible)
}

/// Recovers a prime pair `(p, q)` with `p * q == n` by trial division.
///
/// Candidates run from 2 up to, but excluding, `n`. The first divisor whose
/// cofactor is also prime wins, so `p <= q` for a product of two primes.
/// Returns `None` for primes, for values below 4, and for composites that
/// are not a product of exactly two primes.
pub fn find_prime_factors(n: &BigUint) -> Option<(BigUint, BigUint)> {
    let mut i = BigUint::from(2u32);
    while &i < n {
        if (n % &i).is_zero() {
            let cofactor = n / &i;
            if is_prime(&i) && is_prime(&cofactor) {
                return Some((i, cofactor));
            }
        }
        i += 1u32;
    }
    None
}
