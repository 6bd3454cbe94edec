use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "warden",
    version,
    about = "Deny-by-default capability leases for simulated danger actions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Mint a lease token
    Mint(MintArgs),
    /// Verify a token signature
    Verify(VerifyArgs),
    /// Attempt a simulated danger action
    Act(ActArgs),
    /// Ingest a memory event through the guarded gate
    MemoryIngest(MemoryIngestArgs),
    /// Run the full deny-by-default transcript
    RunScenario,
}

#[derive(Parser, Debug)]
pub struct MintArgs {
    /// Allowed action (repeatable)
    #[arg(long = "scope", required = true)]
    pub scope: Vec<String>,

    /// TTL in seconds (negative mints an already-expired lease)
    #[arg(long, default_value_t = 60, allow_hyphen_values = true)]
    pub ttl: i64,

    /// Optional stable nonce (otherwise a random UUID)
    #[arg(long)]
    pub nonce: Option<String>,

    /// Issuer secret
    #[arg(long, default_value = "demo-secret")]
    pub secret: String,
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// JSON token
    #[arg(long)]
    pub token: String,

    /// Issuer secret
    #[arg(long, default_value = "demo-secret")]
    pub secret: String,
}

#[derive(Parser, Debug)]
pub struct ActArgs {
    /// Action to attempt
    #[arg(long)]
    pub action: String,

    /// JSON token (omit to exercise deny-by-default)
    #[arg(long)]
    pub token: Option<String>,

    /// Issuer secret
    #[arg(long, default_value = "demo-secret")]
    pub secret: String,
}

#[derive(Parser, Debug)]
pub struct MemoryIngestArgs {
    /// Memory event content
    #[arg(long)]
    pub event: String,
}
