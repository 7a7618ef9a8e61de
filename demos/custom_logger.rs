//! Plug a custom leveled logger into the client.
//!
//! # Running
//!
//! ```bash
//! PHONE_AUTH_CUSTOMER_UUID=... PHONE_AUTH_API_KEY=... \
//!     cargo run --example custom_logger
//! ```

use phone_auth::{AuthenticateOptions, Client, LeveledLogger};
use std::env;
use std::sync::Arc;

struct PrefixLogger;

impl LeveledLogger for PrefixLogger {
    fn debug(&self, message: &str) {
        println!("phone-auth DEBUG: {message}");
    }

    fn info(&self, message: &str) {
        println!("phone-auth INFO: {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("phone-auth WARN: {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("phone-auth ERROR: {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::builder(
        env::var("PHONE_AUTH_CUSTOMER_UUID")?,
        env::var("PHONE_AUTH_API_KEY")?,
    )
    .logger(Arc::new(PrefixLogger))
    .build()?;

    let auth = client
        .authenticate(AuthenticateOptions::new("+33612345678"))
        .await?;

    println!("challenge: {}", auth.authentication_uuid);

    Ok(())
}
