//! Lease issuer: the only signer and verifier of capability leases.
//!
//! The issuer owns the shared secret, the current revocation epoch, and the
//! set of individually revoked nonces. Epoch and revoked set live behind a
//! single mutex so `bump_epoch` / `revoke_nonce` are atomic with respect to
//! concurrent enforcement checks.

use std::collections::{BTreeSet, HashSet};
use std::sync::Mutex;

use anyhow::Result;
use chrono::Utc;
use rand::RngCore;
use serde_json::Value;
use uuid::Uuid;

use crate::crypto;
use crate::lease::{Lease, LeaseBody};

/// Outcome of signature/shape verification.
///
/// `reason` is always populated, including on success. On success `body`
/// carries the reconstructed signed fields for downstream checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyResult {
    pub ok: bool,
    pub reason: String,
    pub body: Option<LeaseBody>,
}

impl VerifyResult {
    fn fail(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: reason.into(),
            body: None,
        }
    }

    fn pass(body: LeaseBody) -> Self {
        Self {
            ok: true,
            reason: "signature valid".to_string(),
            body: Some(body),
        }
    }
}

#[derive(Debug)]
struct RevocationState {
    epoch: u64,
    revoked_nonces: HashSet<String>,
}

/// Issuer of capability leases.
pub struct Issuer {
    secret: Vec<u8>,
    state: Mutex<RevocationState>,
}

// The secret must not appear in Debug output.
impl std::fmt::Debug for Issuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Issuer")
            .field("secret", &"<redacted>")
            .field("state", &self.state)
            .finish()
    }
}

const REQUIRED_FIELDS: [&str; 6] = [
    "issued_at",
    "expires_at",
    "scope",
    "epoch",
    "nonce",
    "signature",
];

impl Issuer {
    /// Create an issuer with a fixed secret.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            state: Mutex::new(RevocationState {
                // Start at 1 so "epoch bump" reads naturally as a revoke-all
                // primitive. The baseline value is not load-bearing.
                epoch: 1,
                revoked_nonces: HashSet::new(),
            }),
        }
    }

    /// Create an issuer with a fresh random 32-byte secret.
    pub fn with_generated_secret() -> Self {
        let mut secret = vec![0u8; 32];
        rand::thread_rng().fill_bytes(&mut secret);
        Self::new(secret)
    }

    /// Mint a signed capability lease.
    ///
    /// `ttl_seconds` may be negative; that mints an already-expired lease on
    /// purpose. Validity is an enforcement-time property, not a minting-time
    /// one.
    ///
    /// `now` overrides the wall clock (testing hook); `nonce` overrides the
    /// generated UUIDv4 nonce.
    pub fn mint_lease(
        &self,
        scopes: &[String],
        ttl_seconds: i64,
        nonce: Option<String>,
        now: Option<i64>,
    ) -> Result<Lease> {
        let issued_at = now.unwrap_or_else(|| Utc::now().timestamp());
        let scope: Vec<String> = scopes.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        let body = LeaseBody {
            issued_at,
            expires_at: issued_at + ttl_seconds,
            scope,
            epoch: self.epoch(),
            nonce: nonce.unwrap_or_else(|| Uuid::new_v4().to_string()),
        };
        let signature = crypto::sign(&self.secret, &body)?;
        tracing::debug!(nonce = %body.nonce, expires_at = body.expires_at, "minted lease");
        Ok(Lease { body, signature })
    }

    /// Verify a wire-form lease token: presence, shape, temporal sanity, and
    /// signature, in that order. Cheap structural checks run before the
    /// cryptographic comparison; the first failing check names the reason.
    pub fn verify_signature(&self, token: &Value) -> VerifyResult {
        let Some(obj) = token.as_object() else {
            return VerifyResult::fail("token must be an object");
        };

        let mut missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !obj.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            return VerifyResult::fail(format!("missing required fields: {missing:?}"));
        }

        let Some(issued_at) = obj["issued_at"].as_i64() else {
            return VerifyResult::fail("invalid type: issued_at must be an integer");
        };
        let Some(expires_at) = obj["expires_at"].as_i64() else {
            return VerifyResult::fail("invalid type: expires_at must be an integer");
        };
        let Some(epoch) = obj["epoch"].as_u64() else {
            return VerifyResult::fail("invalid type: epoch must be a non-negative integer");
        };
        let Some(nonce) = obj["nonce"].as_str() else {
            return VerifyResult::fail("invalid type: nonce must be a string");
        };
        let Some(signature) = obj["signature"].as_str() else {
            return VerifyResult::fail("invalid type: signature must be a string");
        };
        let scope: Option<Vec<String>> = obj["scope"].as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect()
        });
        let Some(scope) = scope else {
            return VerifyResult::fail("invalid type: scope must be an array of strings");
        };

        // A lease must not expire before it was issued, signature or not.
        if expires_at < issued_at {
            return VerifyResult::fail("expires_at < issued_at");
        }

        let body = LeaseBody {
            issued_at,
            expires_at,
            scope,
            epoch,
            nonce: nonce.to_string(),
        };
        match crypto::verify(&self.secret, &body, signature) {
            Ok(true) => VerifyResult::pass(body),
            Ok(false) => {
                tracing::warn!(nonce = %body.nonce, "lease signature verification failed");
                VerifyResult::fail("bad signature")
            }
            Err(err) => VerifyResult::fail(format!("canonicalization failed: {err}")),
        }
    }

    /// Increment and return the revocation epoch. Invalidates every lease
    /// minted under a prior epoch.
    pub fn bump_epoch(&self) -> u64 {
        let mut state = self.state.lock().expect("issuer state lock poisoned");
        state.epoch += 1;
        tracing::info!(epoch = state.epoch, "revocation epoch bumped; all prior leases revoked");
        state.epoch
    }

    /// Revoke a single lease by nonce. Idempotent; there is no un-revoke.
    pub fn revoke_nonce(&self, nonce: &str) {
        let mut state = self.state.lock().expect("issuer state lock poisoned");
        state.revoked_nonces.insert(nonce.to_string());
    }

    /// Current revocation epoch.
    pub fn epoch(&self) -> u64 {
        self.state.lock().expect("issuer state lock poisoned").epoch
    }

    pub fn is_nonce_revoked(&self, nonce: &str) -> bool {
        self.state
            .lock()
            .expect("issuer state lock poisoned")
            .revoked_nonces
            .contains(nonce)
    }
}
