#![no_main]

use libfuzzer_sys::fuzz_target;
use paseto::{PrivateKey, PublicKey, SymmetricKey, Version};

fuzz_target!(|data: &[u8]| {
    // Key constructors must reject arbitrary input without panicking
    let _ = SymmetricKey::from_bytes(Version::V1, data);
    let _ = SymmetricKey::from_bytes(Version::V2, data);
    let _ = PrivateKey::from_bytes(Version::V1, data);
    let _ = PrivateKey::from_bytes(Version::V2, data);
    let _ = PublicKey::from_bytes(Version::V1, data);
    let _ = PublicKey::from_bytes(Version::V2, data);

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = SymmetricKey::from_hex(Version::V2, text);
        let _ = SymmetricKey::from_base64(Version::V2, text);
        let _ = PrivateKey::from_hex(Version::V2, text);
        let _ = PublicKey::from_base64(Version::V2, text);
    }
});
