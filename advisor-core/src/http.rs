//! Shared plumbing for the two remote services: one client per fetcher with
//! a fixed deadline, and a single "send, check status, decode" path.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

pub(crate) fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    Client::builder().timeout(timeout).build().map_err(FetchError::Client)
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    service: &'static str,
) -> Result<T, FetchError> {
    let res = request
        .send()
        .await
        .map_err(|source| FetchError::Transport { service, source })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| FetchError::Transport { service, source })?;

    debug!(service, %status, bytes = body.len(), "received response");

    if !status.is_success() {
        return Err(FetchError::Status {
            service,
            status,
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|source| FetchError::Decode { service, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_kept_whole() {
        assert_eq!(truncate_body("{\"cod\":401}"), "{\"cod\":401}");
    }

    #[test]
    fn long_body_is_cut_on_a_char_boundary() {
        let body = "é".repeat(150);
        let cut = truncate_body(&body);

        assert!(cut.ends_with("..."));
        assert!(cut.len() <= 203);
    }
}
