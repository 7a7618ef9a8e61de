//! Send an authentication code to a phone number.
//!
//! # Running
//!
//! ```bash
//! PHONE_AUTH_CUSTOMER_UUID=... PHONE_AUTH_API_KEY=... \
//!     cargo run --example send_code
//! ```

use phone_auth::{AuthenticateOptions, Client, DeviceType};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::builder(
        env::var("PHONE_AUTH_CUSTOMER_UUID")?,
        env::var("PHONE_AUTH_API_KEY")?,
    )
    .max_network_retries(4)
    .build()?;

    let auth = client
        .authenticate(AuthenticateOptions {
            phone_number: "+33612345678".to_string(),
            ip: Some("192.168.0.1".to_string()),
            device_type: Some(DeviceType::Ios),
            app_version: Some("1.2.0".to_string()),
            callback_url: Some("https://example.com/callback".to_string()),
            is_returning_user: true,
            ..Default::default()
        })
        .await?;

    println!("challenge: {}", auth.authentication_uuid);
    println!("status:    {:?}", auth.status);
    println!("expires:   {}", auth.expires_at);

    Ok(())
}
