//! Request signing
//!
//! Signature = SHA-256 over the signed parameters sorted by name and joined as
//! `k1=v1&k2=v2`, immediately followed by the API secret. Hex encoded, lower case.

use sha2::{Digest, Sha256};

pub const SIGNATURE_ALGORITHM: &str = "sha256";

/// Parameters that are sent but never signed
const UNSIGNED_PARAMS: [&str; 5] = [
    "file",
    "api_key",
    "cloud_name",
    "resource_type",
    "signature_algorithm",
];

/// String the signature is computed over, without the secret.
pub fn string_to_sign(params: &[(&str, String)]) -> String {
    let mut signed: Vec<&(&str, String)> = params
        .iter()
        .filter(|(key, value)| !UNSIGNED_PARAMS.contains(key) && !value.is_empty())
        .collect();
    signed.sort_by(|a, b| a.0.cmp(b.0));

    signed
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(string_to_sign(params).as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
