//! Humanize a piece of text end to end.
//!
//! Run with:
//! `HUMANIZER_API_KEY=... RUST_LOG=humanize_client=debug cargo run --example humanize -- "Some text." academic`

use humanize_client::{HumanizeOptions, HumanizerClient, HumanizerConfig, Tone};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let text = args
        .next()
        .unwrap_or_else(|| "The meeting has been moved. Please update your calendar.".to_string());
    let tone: Option<Tone> = args
        .next()
        .map(|t| serde_json::from_value(serde_json::Value::String(t)))
        .transpose()?;

    let client = HumanizerClient::builder()
        .config(HumanizerConfig::from_env()?)
        .build()?;

    println!("credits remaining: {}", client.credits_remaining().await);

    let mut options = HumanizeOptions::new();
    options.tone = tone;
    let outcome = client.humanize_detailed(&text, &options).await?;

    println!("source: {:?}", outcome.source);
    println!("{}", outcome.text);
    Ok(())
}
