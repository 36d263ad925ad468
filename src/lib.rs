//! Typed Rust client for the Dialog e-SMS message-via-URL HTTP API.
//!
//! The gateway answers with bare plaintext status codes (`"1"`, `"2008"`, ...)
//! and, for balance checks, a `<code>|<balance>` pair. This crate turns those
//! bodies into a typed [`Outcome`]: a domain layer of strong types, a transport
//! layer for wire-format quirks, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use dialog_esms::{Credentials, EsmsClient, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EsmsClient::new(Credentials::with_default_base_url("...")?);
//!     let request = SendMessage::new(["0771234567"], "hello", "MYSHOP");
//!     let outcome = client.send_message(request).await?;
//!     println!("{} {}", outcome.code, outcome.message);
//!
//!     let balance = client.check_balance().await?;
//!     println!("balance: {:?}", balance.balance());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, EsmsClient, EsmsClientBuilder, EsmsError, TransportFailure};
pub use domain::{
    ApiKey, BaseUrl, ConfigurationError, KnownStatusCode, Outcome, Payload, SendMessage,
    StatusCode,
};
pub use rust_decimal::Decimal;
