use super::args::*;

pub mod act;
pub mod memory;
pub mod mint;
pub mod scenario;
pub mod verify;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Mint(args) => mint::run(args),
        Command::Verify(args) => verify::run(args),
        Command::Act(args) => act::run(args),
        Command::MemoryIngest(args) => memory::run(args),
        Command::RunScenario => scenario::run(),
    }
}

/// Parse a `--token` argument into a wire token. Malformed JSON or a
/// non-object is a fatal CLI error, not a Decision.
pub(crate) fn parse_token(raw: &str) -> anyhow::Result<serde_json::Value> {
    let token: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| anyhow::anyhow!("invalid JSON token: {e}"))?;
    anyhow::ensure!(token.is_object(), "token must be a JSON object");
    Ok(token)
}
