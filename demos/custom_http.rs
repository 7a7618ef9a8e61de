//! Use a custom HTTP client with its own timeouts.
//!
//! # Running
//!
//! ```bash
//! PHONE_AUTH_CUSTOMER_UUID=... PHONE_AUTH_API_KEY=... \
//!     cargo run --example custom_http
//! ```

use phone_auth::{AuthenticateOptions, Client};
use reqwest_middleware::ClientBuilder;
use std::env;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(2))
        .build()?;

    let client = Client::builder(
        env::var("PHONE_AUTH_CUSTOMER_UUID")?,
        env::var("PHONE_AUTH_API_KEY")?,
    )
    .http_client(ClientBuilder::new(http_client).build())
    .build()?;

    let auth = client
        .authenticate(AuthenticateOptions::new("+33612345678"))
        .await?;

    println!("challenge: {}", auth.authentication_uuid);

    Ok(())
}
