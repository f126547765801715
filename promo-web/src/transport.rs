//! `fetch`-backed [`SubmissionTransport`].
use crate::dom;
use promo_core::{ApiReply, SubmissionTransport, TransportError};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchTransport;

impl SubmissionTransport for FetchTransport {
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<ApiReply, TransportError> {
        let reply = dom::post_json(endpoint, &body.to_string())
            .await
            .map_err(TransportError::Network)?;
        log::debug!("POST {endpoint} -> {}", reply.status);
        Ok(ApiReply::new(reply.status, reply.status_text, reply.body))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use promo_core::{SubmitError, SupportPayload, post_support};

    #[test]
    fn host_requests_fail_as_network_errors() {
        let payload = SupportPayload::new("Sam", "sam@example.com", "Hi", "/faq");
        let err = block_on(post_support(&FetchTransport, "https://api.test/support", &payload))
            .unwrap_err();
        assert!(matches!(err, SubmitError::Transport(TransportError::Network(_))));
    }
}
