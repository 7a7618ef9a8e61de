//! Ask the server to send a new code for an existing challenge.
//!
//! # Running
//!
//! ```bash
//! PHONE_AUTH_CUSTOMER_UUID=... PHONE_AUTH_API_KEY=... \
//!     cargo run --example retry_code -- <authentication_uuid>
//! ```

use phone_auth::Client;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let authentication_uuid = env::args()
        .nth(1)
        .expect("missing authentication UUID argument");

    let client = Client::new(
        env::var("PHONE_AUTH_CUSTOMER_UUID")?,
        env::var("PHONE_AUTH_API_KEY")?,
    )?;

    let retry = client.retry(&authentication_uuid).await?;

    println!("status:           {:?}", retry.status);
    println!("next retry at:    {}", retry.next_retry_at);
    println!("remaining retries: {}", retry.remaining_retry);

    Ok(())
}
