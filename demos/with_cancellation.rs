//! Cancel an in-flight authentication from another task.
//!
//! # Running
//!
//! ```bash
//! PHONE_AUTH_CUSTOMER_UUID=... PHONE_AUTH_API_KEY=... \
//!     cargo run --example with_cancellation
//! ```

use phone_auth::{AuthenticateOptions, CancellationToken, Client, Error};
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new(
        env::var("PHONE_AUTH_CUSTOMER_UUID")?,
        env::var("PHONE_AUTH_API_KEY")?,
    )?;

    let token = CancellationToken::new();
    let cancel = token.clone();

    // Abort the request if it is still running after 5 seconds.
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(5)).await;
        println!("cancelling...");
        cancel.cancel();
    });

    match client
        .authenticate_cancellable(AuthenticateOptions::new("+33612345678"), token)
        .await
    {
        Ok(auth) => println!("challenge: {}", auth.authentication_uuid),
        Err(Error::Internal) => println!("request did not complete (cancelled or failed)"),
        Err(e) => println!("error: {e}"),
    }

    Ok(())
}
