use super::super::args::VerifyArgs;
use crate::exit_codes::SUCCESS;
use warden_core::Issuer;

pub(crate) fn run(args: VerifyArgs) -> anyhow::Result<i32> {
    let issuer = Issuer::new(&args.secret);
    let token = super::parse_token(&args.token)?;
    let result = issuer.verify_signature(&token);
    println!(
        "{}",
        serde_json::json!({ "ok": result.ok, "reason": result.reason })
    );
    Ok(SUCCESS)
}
