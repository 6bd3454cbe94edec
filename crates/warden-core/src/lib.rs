//! Capability-lease authorization core.
//!
//! Warden issues short-lived, HMAC-signed leases that grant scoped permission
//! to perform specific danger actions, and enforces them at the point an
//! action is attempted. A separate guarded memory gate screens inbound text
//! events for sensitive content before they can reach policy memory.
//!
//! The posture is deny-by-default: no action succeeds without an unexpired,
//! unrevoked, correctly-scoped, correctly-signed lease, and no event reaches
//! durable policy memory without passing the content filter.
//!
//! Authorization outcomes (expired, revoked, wrong scope, bad signature,
//! unknown action) are data, returned as [`Decision`] / [`VerifyResult`]
//! values. Only caller contract violations (non-text memory events, attempted
//! real execution) use the error channel.

pub mod crypto;
pub mod exec;
pub mod issuer;
pub mod lease;
pub mod memory;
pub mod proxy;

pub use exec::{ActionExecutor, ExecError, SimulatedExecutor};
pub use issuer::{Issuer, VerifyResult};
pub use lease::{Lease, LeaseBody};
pub use memory::{GateError, GuardedMemory, Route};
pub use proxy::{Decision, ToolProxy, DANGER_ACTIONS};
