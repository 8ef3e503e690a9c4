use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha1::{Digest, Sha1};

/// Hash a plaintext password into the digest format stored in `accounts.password`.
///
/// The legacy login server stores the raw 20-byte SHA-1 digest encoded as
/// padded standard base64, so the output must match it byte for byte:
/// `base64(sha1(password))`.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    STANDARD.encode(hasher.finalize())
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(password: &str, digest: &str) -> bool {
    hash_password(password) == digest
}
