//! Request and outcome types for a single humanization call.

use super::options::HumanizeOptions;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated input for one humanization call.
///
/// The text is guaranteed to contain at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanizeRequest {
    text: String,
    options: HumanizeOptions,
}

impl HumanizeRequest {
    pub fn new(text: impl Into<String>, options: HumanizeOptions) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::validation_with_context(
                "Text is required for humanization",
                ErrorContext::new()
                    .with_field_path("request.text")
                    .with_source("humanize_request"),
            ));
        }
        Ok(Self { text, options })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &HumanizeOptions {
        &self.options
    }
}

/// Opaque job identifier issued by the remote service.
///
/// Not `Clone`: a handle is consumed by exactly one poll loop.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmissionHandle(String);

impl SubmissionHandle {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SubmissionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why the local transformer produced the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// Submission carried an error field or no job id.
    SubmissionRejected,
    /// Poll budget consumed without usable output.
    PollExhausted,
    /// Transport, remote or request-construction failure.
    Failed,
}

/// Where the returned text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum OutputSource {
    Remote { job_id: String },
    Fallback { reason: FallbackReason },
}

/// Text plus its provenance.
///
/// [`HumanizerClient::humanize`](crate::HumanizerClient::humanize) erases the
/// provenance; use [`HumanizerClient::humanize_detailed`](crate::HumanizerClient::humanize_detailed)
/// when downstream consumers care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanizeOutcome {
    #[serde(flatten)]
    pub source: OutputSource,
    pub text: String,
}

impl HumanizeOutcome {
    pub fn remote(job_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: OutputSource::Remote {
                job_id: job_id.into(),
            },
            text: text.into(),
        }
    }

    pub fn fallback(reason: FallbackReason, text: impl Into<String>) -> Self {
        Self {
            source: OutputSource::Fallback { reason },
            text: text.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, OutputSource::Fallback { .. })
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
