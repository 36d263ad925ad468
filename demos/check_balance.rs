use dialog_esms::{Credentials, EsmsClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = EsmsClient::new(Credentials::from_env()?);
    let outcome = client.check_balance().await?;

    println!(
        "code: {}, message: {}, balance: {:?}",
        outcome.code,
        outcome.message,
        outcome.balance()
    );

    Ok(())
}
