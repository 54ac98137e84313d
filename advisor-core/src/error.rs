use reqwest::StatusCode;
use thiserror::Error;

/// Why a call to one of the remote services produced no usable data.
///
/// Callers in the session never surface these variants to the user; they are
/// logged and collapsed into "could not fetch".
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client itself could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} responded with status {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("unexpected {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
