//! # humanize-client
//!
//! 文本人性化客户端：提交远程任务、有限轮询，失败时退回本地改写。
//!
//! Async client for a remote text humanization service, with bounded polling
//! and a local rule-based rewrite when the service is slow, erroring or down.
//!
//! ## Overview
//!
//! A humanization call goes through three stages:
//!
//! 1. **Submit**: the text and translated options are posted; the service
//!    returns a job id.
//! 2. **Poll**: the job is queried at a fixed interval until output appears
//!    or the attempt budget is spent (15 × 3 s by default).
//! 3. **Fallback**: on any failure after input validation, the text is
//!    rewritten locally instead.
//!
//! Callers always get text back unless the input itself is empty.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use humanize_client::{HumanizerClient, HumanizeOptions, Tone};
//!
//! #[tokio::main]
//! async fn main() -> humanize_client::Result<()> {
//!     let client = HumanizerClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let options = HumanizeOptions::new().with_tone(Tone::Friendly);
//!     let text = client.humanize("The results are in.", &options).await?;
//!     println!("{}", text);
//!
//!     println!("credits left: {}", client.credits_remaining().await);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder and the submit/poll/fallback orchestration |
//! | [`config`] | Explicit configuration, env loading |
//! | [`fallback`] | Local sentence rewriter and random sources |
//! | [`resilience`] | Poll policy (attempts, interval, error classification) |
//! | [`transport`] | JSON-over-HTTP transport |
//! | [`types`] | Options, requests, outcomes and wire payloads |

pub mod client;
pub mod config;
pub mod fallback;
pub mod resilience;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{HumanizerClient, HumanizerClientBuilder};
pub use config::HumanizerConfig;
pub use fallback::{FallbackTransformer, RandomSource};
pub use resilience::PollPolicy;
pub use types::{
    Conservativeness, FallbackReason, HumanizeOptions, HumanizeOutcome, HumanizeRequest, Mode,
    OutputSource, Readability, Strength, Tone,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

/// Humanize `text` with `client`. Rejects only empty or whitespace input.
pub async fn humanize_text(
    client: &HumanizerClient,
    text: &str,
    options: &HumanizeOptions,
) -> Result<String> {
    client.humanize(text, options).await
}

/// Remaining remote quota; 0 on any failure.
pub async fn credits_remaining(client: &HumanizerClient) -> u64 {
    client.credits_remaining().await
}
