//! Integration tests against a real API deployment.
//!
//! These tests perform real authentications and require valid credentials.
//! They are ignored by default and should be run manually.
//!
//! # Setup
//!
//! 1. Copy the example env file:
//!    ```bash
//!    cp tests/.env.example tests/.env
//!    ```
//!
//! 2. Edit `tests/.env` and set your credentials
//!
//! 3. Run the tests:
//!    ```bash
//!    cargo test --test live_api -- --ignored
//!    ```
//!
//! Alternatively, pass the credentials directly:
//! ```bash
//! PHONE_AUTH_CUSTOMER_UUID=... PHONE_AUTH_API_KEY=... \
//!     cargo test --test live_api -- --ignored
//! ```
//!
//! **WARNING**: these tests send real SMS messages and consume credits!

use phone_auth::{AuthenticateOptions, Client, Error};
use std::env;

/// Read a required variable from the environment or tests/.env.
fn env_var(name: &str) -> String {
    dotenvy::dotenv().ok();

    env::var(name).unwrap_or_else(|_| {
        panic!(
            "{name} environment variable must be set.\n\
             Either:\n\
             1. Copy tests/.env.example to tests/.env and set your credentials\n\
             2. Run with: {name}=... cargo test --test live_api -- --ignored"
        )
    })
}

fn create_client() -> Client {
    Client::new(
        env_var("PHONE_AUTH_CUSTOMER_UUID"),
        env_var("PHONE_AUTH_API_KEY"),
    )
    .expect("Failed to create client")
}

#[test]
#[ignore = "requires credentials"]
fn test_client_creation() {
    let _client = create_client();
}

#[tokio::test]
#[ignore = "requires credentials and sends a real SMS"]
async fn test_authenticate_real_number() {
    let client = create_client();
    let number = env_var("PHONE_AUTH_TEST_NUMBER");

    let auth = client
        .authenticate(AuthenticateOptions::new(number))
        .await
        .expect("authentication request failed");

    println!("challenge: {}", auth.authentication_uuid);
    println!("status: {:?}", auth.status);
    println!("expires at: {}", auth.expires_at);

    assert!(!auth.authentication_uuid.is_empty());
    assert!(auth.expires_at > auth.created_at);
}

#[tokio::test]
#[ignore = "requires credentials"]
async fn test_wrong_api_key_is_rejected() {
    let client = Client::new(
        env_var("PHONE_AUTH_CUSTOMER_UUID"),
        "definitely_not_a_valid_key",
    )
    .expect("Failed to create client");

    let number = env_var("PHONE_AUTH_TEST_NUMBER");
    let err = client
        .authenticate(AuthenticateOptions::new(number))
        .await
        .unwrap_err();

    assert_eq!(err, Error::InvalidApiKey);
}
