// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::One;

use crate::util::gcd;
use crate::{Error, Result};

/// Default upper bound of the exponent search: `phi + 3`.
///
/// For even `phi >= 4`, `phi - 1` is odd and coprime to `phi`; for
/// `phi` of 1 or 2 the first candidate 3 already qualifies. Only a
/// degenerate totient such as 0 exhausts this bound.
pub fn default_search_limit(phi: &BigUint) -> BigUint {
    phi + 3u32
}

/// Finds the smallest odd `e >= 3` with `gcd(e, phi) == 1`.
///
/// Candidates are tried in steps of two up to and including `limit`.
///
/// ## Error
///
/// Returns [`Error::ExponentNotFound`] when no candidate qualifies.
pub fn find_public_exponent(phi: &BigUint, limit: &BigUint) -> Result<BigUint> {
    let mut e = BigUint::from(3u32);
    while &e <= limit {
        if gcd(&e, phi).is_one() {
            return Ok(e);
        }
        e += 2u32;
    }

    Err(Error::ExponentNotFound { limit: limit.clone() })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn search(phi: u64) -> Result<BigUint> {
        let phi = BigUint::from(phi);
        find_public_exponent(&phi, &default_search_limit(&phi))
    }

    #[test]
    fn smallest_coprime_odd_exponent() {
        // 3120 = 2⁴·3·5·13
        assert_eq!(search(3120).unwrap(), BigUint::from(7u32));
        // 2·3·5·7 = 210 rules out 3, 5, 7
        assert_eq!(search(210).unwrap(), BigUint::from(11u32));
        assert_eq!(search(4).unwrap(), BigUint::from(3u32));
    }

    #[test]
    fn tiny_totients() {
        // p = q = 2 gives phi = 1, p = 2 / q = 3 gives phi = 2
        assert_eq!(search(1).unwrap(), BigUint::from(3u32));
        assert_eq!(search(2).unwrap(), BigUint::from(3u32));
    }

    #[test]
    fn zero_totient_is_reported() {
        assert!(matches!(search(0), Err(Error::ExponentNotFound { .. })));
    }

    #[test]
    fn explicit_limit_is_inclusive() {
        let phi = BigUint::from(3120u32);
        assert_eq!(find_public_exponent(&phi, &BigUint::from(7u32)).unwrap(), BigUint::from(7u32));

        let result = find_public_exponent(&phi, &BigUint::from(6u32));
        assert!(matches!(result, Err(Error::ExponentNotFound { limit }) if limit == BigUint::from(6u32)));
    }
}
