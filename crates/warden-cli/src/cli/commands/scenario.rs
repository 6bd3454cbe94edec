//! Full transcript of the deny-by-default flow: deny-all, a NET-only lease,
//! global revoke via epoch bump, a fresh lease, nonce revocation, and a
//! guarded memory quarantine.

use super::act::print_action_result;
use crate::exit_codes::SUCCESS;
use warden_core::{GuardedMemory, Issuer, Route, ToolProxy};

const NET: &str = "NET:https://example.com";
const WRITE: &str = "FILE_WRITE:/tmp/demo.txt";
const SHELL: &str = "SHELL:ls";

pub(crate) fn run() -> anyhow::Result<i32> {
    let issuer = Issuer::new("demo-secret");
    let proxy = ToolProxy::new(&issuer);
    let memory = GuardedMemory::default();

    println!("=== Scenario: deny-by-default with capability leases ===");
    for action in [NET, WRITE, SHELL] {
        print_action_result(action, &proxy.enforce(action, None))?;
    }

    println!("=== Mint NET-only lease ===");
    let lease = issuer.mint_lease(&[NET.to_string()], 120, Some("n1".into()), None)?;
    let token = lease.to_value();
    for action in [NET, WRITE, SHELL] {
        print_action_result(action, &proxy.enforce(action, Some(&token)))?;
    }

    println!("=== Global revoke-all via epoch bump ===");
    issuer.bump_epoch();
    for action in [NET, WRITE, SHELL] {
        print_action_result(action, &proxy.enforce(action, Some(&token)))?;
    }

    println!("=== Mint fresh lease after epoch bump ===");
    let fresh = issuer.mint_lease(&[NET.to_string()], 120, Some("n2".into()), None)?;
    let fresh_token = fresh.to_value();
    print_action_result(NET, &proxy.enforce(NET, Some(&fresh_token)))?;

    println!("=== Revoke nonce and retry ===");
    issuer.revoke_nonce("n2");
    print_action_result(NET, &proxy.enforce(NET, Some(&fresh_token)))?;

    println!("=== Guarded memory quarantine ===");
    match memory.ingest_text("User note includes SECRET: 12345") {
        Route::Quarantine => println!("MEMORY quarantined flagged event; policy memory NOT updated"),
        Route::Policy => println!("MEMORY accepted event into policy memory"),
    }

    let (policy, quarantine) = memory.counts();
    println!("MEMORY_COUNTS policy={policy} quarantine={quarantine}");

    Ok(SUCCESS)
}
