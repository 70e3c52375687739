// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

mod decrypt;
mod encrypt;

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::error::Result;

/// Encrypts a single message unit with the public exponent.
pub trait Encrypt {
    /// Compute `message_unit^e mod n`.
    ///
    /// Units must be strictly smaller than `n` to decrypt back to the same
    /// value. Larger units are reduced modulo `n` without an error.
    fn encrypt(&self, message_unit: &BigUint) -> BigUint;

    /// Encrypt the code point of a single character.
    fn encrypt_char(&self, c: char) -> BigUint {
        self.encrypt(&BigUint::from(u32::from(c)))
    }
}

/// Encrypts text one character at a time.
///
/// There is no padding, chaining or randomness: identical characters
/// always produce identical ciphertext values.
pub trait EncryptText: Encrypt {
    fn encrypt_text(&self, text: &str) -> Ciphertext {
        encrypt::encrypt_chars(self, text)
    }
}

/// Decrypts a single ciphertext unit with the private exponent.
pub trait Decrypt {
    /// Compute `ciphertext_unit^d mod n`.
    fn decrypt(&self, ciphertext_unit: &BigUint) -> BigUint;

    /// Decrypt a single unit back to a character.
    ///
    /// ## Error
    ///
    /// Fails with [`crate::Error::CodePointOutOfRange`] when the decrypted
    /// value is not a Unicode scalar value.
    fn decrypt_char(&self, ciphertext_unit: &BigUint) -> Result<char> {
        decrypt::to_char(self.decrypt(ciphertext_unit))
    }
}

/// Decrypts a ciphertext sequence back into text, preserving order.
pub trait DecryptText: Decrypt {
    fn decrypt_text(&self, ciphertext: &Ciphertext) -> Result<String> {
        decrypt::decrypt_chars(self, ciphertext)
    }
}


#[cfg(test)]
mod test_decryption {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::Error;
    use crate::keypair::KeyMaterial;

    fn key(p: u32, q: u32) -> KeyMaterial {
        KeyMaterial::derive(BigUint::from(p), BigUint::from(q)).unwrap()
    }

    #[test]
    fn decrypt_textbook_unit() {
        let key = KeyMaterial::with_exponent(
            BigUint::from(61u32),
            BigUint::from(53u32),
            BigUint::from(17u32),
        )
        .unwrap();
        assert_eq!(key.decrypt(&BigUint::from(2790u32)), BigUint::from(65u32));
        assert_eq!(key.decrypt_char(&BigUint::from(2790u32)).unwrap(), 'A');
    }

    #[test]
    fn roundtrip_ascii() {
        let key = key(61, 53);
        let message = "Hello, World!";

        let ciphertext = key.encrypt_text(message);
        assert_eq!(key.decrypt_text(&ciphertext).unwrap(), message);
    }

    #[test]
    fn roundtrip_non_ascii_below_modulus() {
        // n = 64507 covers the BMP code points used here
        let key = key(251, 257);
        let message = "héllo こんにちは";

        let ciphertext = key.encrypt_text(message);
        assert_eq!(ciphertext.len(), message.chars().count());
        assert_eq!(key.decrypt_text(&ciphertext).unwrap(), message);
    }

    #[test]
    fn roundtrip_empty() {
        let key = key(61, 53);
        assert_eq!(key.decrypt_text(&Ciphertext::default()).unwrap(), "");
    }

    #[test]
    fn order_is_preserved() {
        let key = key(61, 53);
        let mut values = key.encrypt_text("ab").into_values();
        values.reverse();

        assert_eq!(key.decrypt_text(&Ciphertext::new(values)).unwrap(), "ba");
    }

    #[test]
    fn surrogate_is_out_of_range() {
        // 0xD800 = 55296 < n = 64507, but not a scalar value
        let key = key(251, 257);
        let c = key.encrypt(&BigUint::from(0xD800u32));

        let result = key.decrypt_char(&c);
        assert!(matches!(result, Err(Error::CodePointOutOfRange { value }) if value == BigUint::from(0xD800u32)));
    }

    #[test]
    fn value_above_u32_is_out_of_range() {
        let result = decrypt::to_char(BigUint::from(u64::from(u32::MAX) + 1));
        assert!(matches!(result, Err(Error::CodePointOutOfRange { .. })));
    }
}
