use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Derives the value a webhook caller presents instead of the raw token.
///
/// SHA-256 over `name || secret || token`, encoded as padded base64url.
pub fn compute_verification_hash(name: &str, secret: &str, token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(secret.as_bytes());
    hasher.update(token.as_bytes());
    URL_SAFE.encode(hasher.finalize())
}
