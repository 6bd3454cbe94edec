//! Tripwire keeping this tree simulation-only.

use warden_core::ExecError;

/// Env flag gating real execution. The core never executes anything real;
/// this trips loudly if someone flips the flag expecting it to.
pub const ALLOW_REAL_EXECUTION_VAR: &str = "WARDEN_ALLOW_REAL_EXECUTION";

/// Fails loudly if `WARDEN_ALLOW_REAL_EXECUTION=1` is set.
///
/// Converting this into a real executor means deliberately removing this
/// tripwire and injecting an executor through
/// [`warden_core::ActionExecutor`], taking on the safety and auditing burden
/// that comes with it.
pub fn tripwire_if_real_execution_attempted() -> Result<(), ExecError> {
    if std::env::var(ALLOW_REAL_EXECUTION_VAR).as_deref() == Ok("1") {
        return Err(ExecError::RealExecutionForbidden(format!(
            "tripwire: simulation-only build, refusing to proceed. \
             You set {ALLOW_REAL_EXECUTION_VAR}=1; \
             inject a real executor instead of flipping this flag"
        )));
    }
    Ok(())
}
