//! HTTP transport for the remote humanization service.

mod http;

pub use http::{HttpTransport, TransportError, API_KEY_HEADER};
