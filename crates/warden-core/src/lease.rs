//! Lease value types and their wire representation.
//!
//! A lease is a flat six-field JSON object. The signature covers exactly the
//! other five fields (the [`LeaseBody`]), never itself.

use serde::{Deserialize, Serialize};

/// The five signed fields of a lease, in their typed form.
///
/// Field names here are the wire names; the canonical signing input is the
/// JCS serialization of this struct, so renaming a field invalidates every
/// previously minted signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseBody {
    /// Seconds since the Unix epoch (or an injected logical clock) at mint.
    pub issued_at: i64,
    /// Invariant `expires_at >= issued_at`, enforced at verification time.
    pub expires_at: i64,
    /// Allowed action identifiers, deduplicated and sorted ascending.
    pub scope: Vec<String>,
    /// Issuer revocation-epoch snapshot at mint time.
    pub epoch: u64,
    /// Unique-per-lease identifier, used for individual revocation.
    pub nonce: String,
}

/// An externalized lease: signed body plus signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lease {
    #[serde(flatten)]
    pub body: LeaseBody,
    /// URL-safe base64 HMAC-SHA256 over the canonical body.
    pub signature: String,
}

impl Lease {
    /// Wire form: a JSON object with exactly the six lease fields.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("lease serialization is infallible")
    }
}
