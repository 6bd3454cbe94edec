//! Tool proxy: enforces capability leases for simulated danger actions.
//!
//! The proxy owns no mutable state. It composes issuer verification with
//! temporal, epoch, nonce, and scope checks into a single allow/deny
//! [`Decision`], short-circuiting at the first failing check. Unknown actions
//! are denied before any lease inspection.

use chrono::Utc;
use serde_json::Value;

use crate::issuer::Issuer;

/// Fixed registry of recognized danger actions. Anything outside this set is
/// unknown and denied by default, lease or not.
pub const DANGER_ACTIONS: [&str; 3] = [
    "NET:https://example.com",
    "FILE_WRITE:/tmp/demo.txt",
    "SHELL:ls",
];

/// Outcome of enforcement. `reason` is always populated and specific enough
/// to distinguish every denial cause without inspecting issuer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    pub reason: String,
}

impl Decision {
    fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: reason.into(),
        }
    }

    fn allow(reason: impl Into<String>) -> Self {
        Self {
            allowed: true,
            reason: reason.into(),
        }
    }
}

/// Enforcement proxy over a shared issuer.
#[derive(Debug)]
pub struct ToolProxy<'a> {
    issuer: &'a Issuer,
}

impl<'a> ToolProxy<'a> {
    pub fn new(issuer: &'a Issuer) -> Self {
        Self { issuer }
    }

    /// Enforce against the wall clock.
    pub fn enforce(&self, action: &str, token: Option<&Value>) -> Decision {
        self.enforce_at(action, token, Utc::now().timestamp())
    }

    /// Enforce at an injected instant (testing hook).
    ///
    /// Check order is fixed: unknown action, absent lease, signature/shape,
    /// expiry, epoch, nonce, scope. A lease expiring exactly `now` is no
    /// longer valid.
    pub fn enforce_at(&self, action: &str, token: Option<&Value>, now: i64) -> Decision {
        if !DANGER_ACTIONS.contains(&action) {
            return Decision::deny(format!("action '{action}' is unknown and denied by default"));
        }

        let Some(token) = token else {
            return Decision::deny("no lease provided (deny-by-default)");
        };

        let verify = self.issuer.verify_signature(token);
        let Some(body) = verify.body else {
            tracing::debug!(action, reason = %verify.reason, "denied: invalid lease");
            return Decision::deny(format!("invalid lease: {}", verify.reason));
        };

        if now >= body.expires_at {
            return Decision::deny("lease expired");
        }

        if body.epoch != self.issuer.epoch() {
            return Decision::deny("lease epoch revoked by global bump");
        }

        if self.issuer.is_nonce_revoked(&body.nonce) {
            return Decision::deny("lease nonce revoked");
        }

        if !body.scope.iter().any(|scoped| scoped == action) {
            return Decision::deny("scope does not allow action");
        }

        Decision::allow("lease valid and scope allows action")
    }
}
