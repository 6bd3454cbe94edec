//! Unified exit codes for the Warden CLI.
//! Part of the public contract: scripts branch on these.

pub const SUCCESS: i32 = 0;
pub const DENIED: i32 = 1; // Enforcement denied the action
pub const CONFIG_ERROR: i32 = 2; // Bad input (malformed token) or setup failure
