use crate::client::error_classification::{classify_failure, FailureKind};
use crate::client::mapping::submit_payload;
use crate::fallback::FallbackTransformer;
use crate::resilience::{PollOutcome, PollPolicy};
use crate::transport::HttpTransport;
use crate::types::wire::{
    error_message, non_empty, CreditsResponse, DocumentQuery, DocumentResponse, SubmitResponse,
};
use crate::types::{
    FallbackReason, HumanizeOptions, HumanizeOutcome, HumanizeRequest, SubmissionHandle,
};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub(crate) const SUBMIT_PATH: &str = "/submit";
pub(crate) const DOCUMENT_PATH: &str = "/document";
pub(crate) const CREDITS_PATH: &str = "/check-user-credits";

/// Client for the remote humanization service.
///
/// Each call owns its own submission handle and poll loop; the client holds
/// no per-call state and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct HumanizerClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) model: String,
    pub(crate) poll: PollPolicy,
    pub(crate) fallback: FallbackTransformer,
}

/// How the remote leg of a call ended, when it did not error.
enum RemoteAttempt {
    Completed { job_id: String, output: String },
    Exhausted { job_id: String, attempts: u32 },
}

impl HumanizerClient {
    pub fn builder() -> crate::client::HumanizerClientBuilder {
        crate::client::HumanizerClientBuilder::new()
    }

    pub fn poll_policy(&self) -> &PollPolicy {
        &self.poll
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Humanize `text`, returning remote output or the local fallback.
    ///
    /// Fails only when `text` is empty or whitespace.
    pub async fn humanize(&self, text: &str, options: &HumanizeOptions) -> Result<String> {
        Ok(self.humanize_detailed(text, options).await?.into_text())
    }

    /// Like [`humanize`](Self::humanize), but reports where the text came from.
    pub async fn humanize_detailed(
        &self,
        text: &str,
        options: &HumanizeOptions,
    ) -> Result<HumanizeOutcome> {
        let request = HumanizeRequest::new(text, options.clone())?;
        Ok(self.humanize_request(&request).await)
    }

    /// Run an already-validated request. Never fails.
    pub async fn humanize_request(&self, request: &HumanizeRequest) -> HumanizeOutcome {
        match self.humanize_remote(request).await {
            Ok(RemoteAttempt::Completed { job_id, output }) => {
                info!(job_id = %job_id, "humanization completed remotely");
                HumanizeOutcome::remote(job_id, output)
            }
            Ok(RemoteAttempt::Exhausted { job_id, attempts }) => {
                warn!(
                    job_id = %job_id,
                    attempts,
                    "Document processing timed out - using fallback humanization"
                );
                self.fall_back(request, FallbackReason::PollExhausted)
            }
            Err(Error::Submission { message }) => {
                warn!(error = %message, "API submission rejected - using fallback humanization");
                self.fall_back(request, FallbackReason::SubmissionRejected)
            }
            Err(e) => {
                log_failure(&e);
                self.fall_back(request, FallbackReason::Failed)
            }
        }
    }

    /// Apply the local transformer directly.
    pub fn fallback(&self, text: &str, options: &HumanizeOptions) -> String {
        self.fallback.transform(text, options)
    }

    fn fall_back(&self, request: &HumanizeRequest, reason: FallbackReason) -> HumanizeOutcome {
        HumanizeOutcome::fallback(reason, self.fallback(request.text(), request.options()))
    }

    async fn humanize_remote(&self, request: &HumanizeRequest) -> Result<RemoteAttempt> {
        let handle = self.submit(request).await?;
        self.await_document(handle).await
    }

    async fn submit(&self, request: &HumanizeRequest) -> Result<SubmissionHandle> {
        let payload = submit_payload(request.text(), request.options(), &self.model);
        debug!(
            readability = payload.readability,
            purpose = payload.purpose,
            strength = payload.strength,
            model = payload.model,
            "submitting document"
        );
        let response: SubmitResponse = self.transport.post_json(SUBMIT_PATH, &payload).await?;

        if let Some(err) = error_message(&response.error) {
            return Err(Error::submission(format!("API submission error: {}", err)));
        }
        let id = non_empty(&response.id)
            .ok_or_else(|| Error::submission("No document ID returned from API"))?;
        debug!(job_id = id, status = ?response.status, "document submitted");
        Ok(SubmissionHandle::new(id))
    }

    async fn await_document(&self, handle: SubmissionHandle) -> Result<RemoteAttempt> {
        let job = &handle;
        let outcome = self
            .poll
            .run(|attempt| async move { self.fetch_document(job, attempt).await })
            .await?;

        let job_id = handle.into_string();
        Ok(match outcome {
            PollOutcome::Ready { value, attempts } => {
                debug!(job_id = %job_id, attempts, "document ready");
                RemoteAttempt::Completed {
                    job_id,
                    output: value,
                }
            }
            PollOutcome::Exhausted { attempts, failures } => {
                debug!(job_id = %job_id, attempts, failures, "poll budget exhausted");
                RemoteAttempt::Exhausted { job_id, attempts }
            }
        })
    }

    async fn fetch_document(&self, handle: &SubmissionHandle, attempt: u32) -> Result<Option<String>> {
        let query = DocumentQuery {
            id: handle.as_str(),
        };
        let doc: DocumentResponse = self.transport.post_json(DOCUMENT_PATH, &query).await?;
        if let Some(output) = non_empty(&doc.output) {
            return Ok(Some(output.to_owned()));
        }
        if let Some(err) = error_message(&doc.error) {
            debug!(attempt, error = %err, "document endpoint reported an error");
        }
        Ok(None)
    }

    /// Remaining remote quota. Any failure is logged and reported as 0.
    pub async fn credits_remaining(&self) -> u64 {
        match self.fetch_credits().await {
            Ok(credits) => credits,
            Err(e) => {
                warn!(error = %e, "Error checking credits");
                0
            }
        }
    }

    async fn fetch_credits(&self) -> Result<u64> {
        let response: CreditsResponse = self.transport.get_json(CREDITS_PATH).await?;
        if let Some(credits) = response.credits.as_ref().and_then(credits_value) {
            return Ok(credits);
        }
        let message = match error_message(&response.error) {
            Some(err) => format!("Credits API returned error: {}", err),
            None => "Credits API returned unexpected response".to_string(),
        };
        Err(Error::Remote {
            status: 200,
            message,
        })
    }
}

// Non-negative integers only; `42.0` counts, `-1` and `1.5` do not.
fn credits_value(value: &serde_json::Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

fn log_failure(err: &Error) {
    match classify_failure(err) {
        FailureKind::Connectivity => error!(
            error = %err,
            "No response received from API. Please check your internet connection."
        ),
        FailureKind::Remote { status, body } => {
            error!(status = ?status, body = %body, "API error - using fallback humanization")
        }
        FailureKind::RequestConstruction => {
            let ctx = err.context().cloned().unwrap_or_else(ErrorContext::new);
            error!(
                error = %err,
                field = ?ctx.field_path,
                "Request setup error - using fallback humanization"
            )
        }
    }
}
