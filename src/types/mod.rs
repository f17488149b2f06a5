//! 类型模块：请求选项、调用结果与远程服务的报文结构。
//!
//! # Types Module
//!
//! Strongly-typed representations of everything that crosses the client boundary.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HumanizeOptions`] | Optional style knobs (mode, readability, strength, tone, ...) |
//! | [`HumanizeRequest`] | Validated, non-empty input text plus options |
//! | [`HumanizeOutcome`] | Output text tagged with its [`OutputSource`] |
//! | [`SubmissionHandle`] | Opaque remote job identifier |
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`options`] | Option enums and lenient deserialization |
//! | [`request`] | Request, handle and outcome types |
//! | [`wire`] | Remote service payloads |
//!
//! ## Example
//!
//! ```rust
//! use humanize_client::types::{HumanizeOptions, HumanizeRequest, Strength, Tone};
//!
//! let options = HumanizeOptions::new()
//!     .with_strength(Strength::High)
//!     .with_tone(Tone::Friendly);
//! let request = HumanizeRequest::new("Rust is fast.", options).unwrap();
//! assert_eq!(request.text(), "Rust is fast.");
//! assert!(HumanizeRequest::new("   ", HumanizeOptions::default()).is_err());
//! ```

pub mod options;
pub mod request;
pub mod wire;

pub use options::{Conservativeness, HumanizeOptions, Mode, Readability, Strength, Tone};
pub use request::{FallbackReason, HumanizeOutcome, HumanizeRequest, OutputSource, SubmissionHandle};
