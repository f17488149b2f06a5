//! Error classification logic for the top-level failure log.

use crate::transport::TransportError;
use crate::Error;

/// Coarse origin of a failed remote humanization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FailureKind {
    /// Request went out but no response came back.
    Connectivity,
    /// The service answered, but with an error status or an unusable body.
    Remote { status: Option<u16>, body: String },
    /// The request could not be built locally.
    RequestConstruction,
}

pub(crate) fn classify_failure(err: &Error) -> FailureKind {
    match err {
        Error::Remote { status, message } => FailureKind::Remote {
            status: Some(*status),
            body: message.clone(),
        },
        Error::Submission { message } => FailureKind::Remote {
            status: None,
            body: message.clone(),
        },
        Error::Serialization(e) => FailureKind::Remote {
            status: None,
            body: e.to_string(),
        },
        Error::Transport(TransportError::Http(e)) => {
            if let Some(status) = e.status() {
                FailureKind::Remote {
                    status: Some(status.as_u16()),
                    body: e.to_string(),
                }
            } else if e.is_builder() {
                FailureKind::RequestConstruction
            } else if e.is_decode() || e.is_body() {
                FailureKind::Remote {
                    status: None,
                    body: e.to_string(),
                }
            } else {
                FailureKind::Connectivity
            }
        }
        Error::Transport(TransportError::Other(_))
        | Error::Validation { .. }
        | Error::Configuration { .. }
        | Error::Runtime { .. } => FailureKind::RequestConstruction,
    }
}
