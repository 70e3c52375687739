#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

use charsa::{DecryptText, EncryptText, KeyMaterial};
use num_bigint_dig::BigUint;

static KEY: OnceLock<KeyMaterial> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    // n = 1103 · 1109 exceeds char::MAX, so every scalar value round-trips
    let key = KEY.get_or_init(|| {
        KeyMaterial::derive(BigUint::from(1103u32), BigUint::from(1109u32)).unwrap()
    });

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let ciphertext = key.encrypt_text(text);
    assert_eq!(ciphertext.len(), text.chars().count());

    let decrypted = key.decrypt_text(&ciphertext).expect("decryption failed for valid ciphertext");
    assert_eq!(text, decrypted);

    let parsed = charsa::Ciphertext::from_lines(&ciphertext.to_lines()).unwrap();
    assert_eq!(parsed, ciphertext);
});
