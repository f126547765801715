//! POSTing payloads through a [`SubmissionTransport`] and classifying the outcome.
use crate::SubmissionTransport;
use crate::TransportError;
use crate::payload::{ApiReply, EntryPayload, SupportPayload};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("API Error: {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("request body could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmitError {
    #[must_use]
    pub fn from_reply(reply: &ApiReply) -> Self {
        Self::Status {
            status: reply.status,
            status_text: reply.status_text.clone(),
        }
    }
}

async fn post<T, B>(transport: &T, endpoint: &str, body: &B) -> Result<ApiReply, SubmitError>
where
    T: SubmissionTransport,
    B: Serialize,
{
    let json = serde_json::to_value(body)?;
    let reply = transport.post_json(endpoint, &json).await?;
    if reply.is_success() {
        Ok(reply)
    } else {
        log::warn!(
            "POST {endpoint} answered {} {}",
            reply.status,
            reply.status_text
        );
        Err(SubmitError::from_reply(&reply))
    }
}

/// Send a sweepstakes entry. Any non-2xx status is an error.
///
/// # Errors
///
/// Returns [`SubmitError`] on transport failure or a non-2xx reply.
pub async fn post_entry<T>(
    transport: &T,
    endpoint: &str,
    payload: &EntryPayload,
) -> Result<ApiReply, SubmitError>
where
    T: SubmissionTransport,
{
    post(transport, endpoint, payload).await
}

/// Send a support question. Any non-2xx status is an error.
///
/// # Errors
///
/// Returns [`SubmitError`] on transport failure or a non-2xx reply.
pub async fn post_support<T>(
    transport: &T,
    endpoint: &str,
    payload: &SupportPayload,
) -> Result<ApiReply, SubmitError>
where
    T: SubmissionTransport,
{
    post(transport, endpoint, payload).await
}
