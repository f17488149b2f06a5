//! Client for the remote humanization service.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod error_classification;
mod mapping;

pub use self::builder::HumanizerClientBuilder;
pub use self::core::HumanizerClient;
