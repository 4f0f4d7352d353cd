#![no_main]

use libfuzzer_sys::fuzz_target;
use paseto::{SymmetricKey, Version};

fuzz_target!(|data: &str| {
    // Decrypting attacker-controlled tokens must never panic
    let v1_key = SymmetricKey::from_bytes(Version::V1, &[0x42; 32]).unwrap();
    let v2_key = SymmetricKey::from_bytes(Version::V2, &[0x42; 32]).unwrap();

    let _ = Version::V1.decrypt(data, &v1_key, b"");
    let _ = Version::V2.decrypt(data, &v2_key, b"");
    let _ = Version::V1.decrypt(data, &v1_key, b"footer");
    let _ = Version::V2.decrypt(data, &v2_key, b"footer");
});
