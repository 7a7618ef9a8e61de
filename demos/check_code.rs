//! Check a code the user entered against an existing challenge.
//!
//! # Running
//!
//! ```bash
//! PHONE_AUTH_CUSTOMER_UUID=... PHONE_AUTH_API_KEY=... \
//!     cargo run --example check_code -- <authentication_uuid> <code>
//! ```

use phone_auth::{CheckStatus, Client};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let authentication_uuid = args.next().expect("missing authentication UUID argument");
    let code = args.next().expect("missing code argument");

    let client = Client::new(
        env::var("PHONE_AUTH_CUSTOMER_UUID")?,
        env::var("PHONE_AUTH_API_KEY")?,
    )?;

    let check = client.check(&authentication_uuid, &code).await?;

    match check.status {
        CheckStatus::Valid => println!("code accepted"),
        CheckStatus::Invalid => println!("wrong code"),
        other => println!("check finished with status {other:?}"),
    }

    Ok(())
}
