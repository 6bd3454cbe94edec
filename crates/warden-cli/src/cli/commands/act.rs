use super::super::args::ActArgs;
use crate::exit_codes::{DENIED, SUCCESS};
use crate::tripwire::tripwire_if_real_execution_attempted;
use warden_core::{ActionExecutor, Decision, Issuer, SimulatedExecutor, ToolProxy};

pub(crate) fn run(args: ActArgs) -> anyhow::Result<i32> {
    let issuer = Issuer::new(&args.secret);
    let proxy = ToolProxy::new(&issuer);
    let token = args.token.as_deref().map(super::parse_token).transpose()?;
    let decision = proxy.enforce(&args.action, token.as_ref());
    tracing::debug!(action = %args.action, allowed = decision.allowed, "enforcement decision");
    print_action_result(&args.action, &decision)?;
    Ok(if decision.allowed { SUCCESS } else { DENIED })
}

/// Print an enforcement outcome and, on allow, run the tripwire and the
/// simulated executor. Shared with the scenario transcript.
pub(crate) fn print_action_result(action: &str, decision: &Decision) -> anyhow::Result<()> {
    let status = if decision.allowed { "ALLOW" } else { "DENY" };
    println!("{status} action={action} reason={}", decision.reason);
    if decision.allowed {
        tripwire_if_real_execution_attempted()?;
        SimulatedExecutor.execute(action)?;
        println!("SIMULATED_EXECUTION action={action} (no external side effects)");
    }
    Ok(())
}
