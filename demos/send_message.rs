use std::io;

use dialog_esms::{Credentials, EsmsClient, EsmsError, SendMessage};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let numbers = std::env::var("DIALOG_LK_ESMS_NUMBERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DIALOG_LK_ESMS_NUMBERS environment variable is required (comma-separated)",
        )
    })?;
    let source_address = std::env::var("DIALOG_LK_ESMS_SOURCE_ADDRESS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "DIALOG_LK_ESMS_SOURCE_ADDRESS environment variable is required",
        )
    })?;
    let message = std::env::var("DIALOG_LK_ESMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the dialog-esms demo.".to_owned());

    let client = EsmsClient::new(Credentials::from_env()?);
    let mut request = SendMessage::new(numbers.split(','), message, source_address);
    if let Ok(url) = std::env::var("DIALOG_LK_ESMS_PUSH_URL") {
        request = request.push_notification_url(url);
    }

    match client.send_message(request).await {
        Ok(outcome) => println!("sent: code {}, {}", outcome.code, outcome.message),
        Err(EsmsError::Rejected(outcome)) => {
            println!("rejected: code {}, {}", outcome.code, outcome.message)
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
