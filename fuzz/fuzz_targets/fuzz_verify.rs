#![no_main]

use libfuzzer_sys::fuzz_target;
use paseto::{PublicKey, Version};

const RSA_PUBLIC_SPKI: &str = r"-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA6kWbJiqkLbwkxrac2gEb
qblc6EXTvdKFyBPz6V1NRbLD/REmcCTs6ooWR5xfhmuVwz/ZgehD9y13ERnugPJC
db3DepoJ+yf4UbEMOeWeIliFUB4dsjFLzg6P/CksCKSWcl+zGU5fPf5EvB/Gnork
C8Eez+iywll0ny6d/Isrvnq4v9B9kAA1Y/iXBwO/RF0IK8nz6rCMZnHXN3rg1eXw
67W3pYvrVbEcbBZ/nZcFCzf4VoOsoqkzmv4AFqxOdYArM5KiU7FtOO7DIBg5LGDT
cDiLecFRAqgkTqXj7irwnYwSWraYLPy9xWenWGlFFvaf6m4a2ZPunINtmisPgSGm
MQIDAQAB
-----END PUBLIC KEY-----";

// Ed25519 public key for the all-0x5e seed
const ED25519_PUBLIC: [u8; 32] = [
    0x81, 0x46, 0x64, 0x0f, 0x02, 0x49, 0x3a, 0xf4, 0xfb, 0xc5, 0x4f, 0xe3, 0x33, 0x88, 0xe7,
    0x5d, 0xc2, 0xc9, 0x37, 0xae, 0x0b, 0x77, 0x27, 0xcc, 0x2b, 0x2a, 0xfb, 0x1b, 0x75, 0x19,
    0x9a, 0x3e,
];

fuzz_target!(|data: &str| {
    // Verifying attacker-controlled tokens must never panic
    let v1_key = PublicKey::from_bytes(Version::V1, RSA_PUBLIC_SPKI.as_bytes()).unwrap();
    let v2_key = PublicKey::from_bytes(Version::V2, &ED25519_PUBLIC).unwrap();

    let _ = Version::V1.verify(data, &v1_key, b"");
    let _ = Version::V2.verify(data, &v2_key, b"");
    let _ = Version::V1.verify(data, &v1_key, b"footer");
    let _ = Version::V2.verify(data, &v2_key, b"footer");
});
