//! Stable, non-reversible identifier for an API key.
//!
//! The raw key never goes into logs or responses; this is what does.

use base64::Engine;
use sha2::{Digest, Sha256};

const KEY_ID_BYTES: usize = 12;

/// base64url(no pad) of the first 12 bytes of SHA-256(key).
pub fn key_id(api_key: &str) -> String {
    let digest = Sha256::digest(api_key.as_bytes());
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&digest[..KEY_ID_BYTES])
}
