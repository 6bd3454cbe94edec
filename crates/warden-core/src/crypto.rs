//! Canonical encoding and HMAC signing of lease bodies.
//!
//! Signing input is JCS (RFC 8785) canonical JSON: lexicographic key order,
//! no insignificant whitespace, UTF-8. Two bodies that are equal as values
//! always canonicalize to identical bytes regardless of how their fields were
//! presented, so signatures are deterministic.

use anyhow::{Context, Result};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::lease::LeaseBody;

type HmacSha256 = Hmac<Sha256>;

/// Canonical (JCS) bytes of a lease body. Pure; identical input yields
/// identical bytes.
pub fn canonicalize(body: &LeaseBody) -> Result<Vec<u8>> {
    serde_jcs::to_vec(body).context("failed to canonicalize lease body")
}

/// HMAC-SHA256 over the canonical body, encoded as padded URL-safe base64.
pub fn sign(secret: &[u8], body: &LeaseBody) -> Result<String> {
    let canonical = canonicalize(body)?;
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(&canonical);
    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}

/// Recompute and compare in constant time.
///
/// A signature that is not valid base64 is a plain mismatch, not an error:
/// callers treat any `false` as "bad signature".
pub fn verify(secret: &[u8], body: &LeaseBody, signature: &str) -> Result<bool> {
    let canonical = canonicalize(body)?;
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(&canonical);
    let Ok(presented) = URL_SAFE.decode(signature) else {
        return Ok(false);
    };
    // verify_slice is the constant-time comparison; a byte-wise == would leak
    // the mismatch position through timing.
    Ok(mac.verify_slice(&presented).is_ok())
}
