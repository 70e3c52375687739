#![no_main]

use libfuzzer_sys::fuzz_target;

use charsa::util::{find_prime_factors, is_prime};
use num_bigint_dig::BigUint;

fuzz_target!(|data: [u8; 2]| {
    // keep n below 2^16 so trial division stays fast
    let n = BigUint::from(u16::from_be_bytes(data));

    match find_prime_factors(&n) {
        Some((p, q)) => {
            assert!(is_prime(&p) && is_prime(&q), "{n} = {p} * {q} with a composite factor");
            assert!(p <= q);
            assert_eq!(&p * &q, n);
        }
        None => {
            // no divisor d with both d and n/d prime
            let mut d = BigUint::from(2u32);
            while &d * &d <= n {
                if (&n % &d) == BigUint::from(0u32) {
                    assert!(!(is_prime(&d) && is_prime(&(&n / &d))), "missed factorization of {n}");
                }
                d += 1u32;
            }
        }
    }
});
