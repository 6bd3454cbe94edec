use super::super::args::MintArgs;
use crate::exit_codes::SUCCESS;
use warden_core::Issuer;

pub(crate) fn run(args: MintArgs) -> anyhow::Result<i32> {
    let issuer = Issuer::new(&args.secret);
    let lease = issuer.mint_lease(&args.scope, args.ttl, args.nonce, None)?;
    println!("{}", serde_json::to_string(&lease)?);
    Ok(SUCCESS)
}
