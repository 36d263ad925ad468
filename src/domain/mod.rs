//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendMessage;
pub use response::{Outcome, Payload};
pub use validation::ConfigurationError;
pub use value::{ApiKey, BaseUrl, KnownStatusCode, StatusCode};
