use super::super::args::MemoryIngestArgs;
use crate::exit_codes::SUCCESS;
use warden_core::{GuardedMemory, Route};

pub(crate) fn run(args: MemoryIngestArgs) -> anyhow::Result<i32> {
    let memory = GuardedMemory::default();
    match memory.ingest_text(&args.event) {
        Route::Quarantine => {
            println!("MEMORY quarantined event (inert), policy memory unchanged");
        }
        Route::Policy => {
            println!("MEMORY accepted event into policy memory");
        }
    }
    Ok(SUCCESS)
}
