//! Local fallback rewrite.
//!
//! Applied when the remote service is slow, erroring or unreachable, so a
//! humanization call always yields text. The `default` tone draws from a
//! [`RandomSource`]; inject [`FixedRandom`] or [`SequenceRandom`] to pin it.

pub mod random;
mod transformer;

pub use random::{FixedRandom, RandomSource, SequenceRandom, ThreadRandom};
pub use transformer::{split_sentences, FallbackTransformer};
