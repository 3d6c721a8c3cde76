//! Response processing: status check through the reporter, then JSON decoding.

use crate::logging::Reporter;
use crate::transport::TransportError;
use crate::{Error, Result};
use serde::de::DeserializeOwned;

/// Decode `response` into `T`.
///
/// A non-success status is reported as [`Error::Remote`]; under
/// [`crate::Severity::Exceptions`] that aborts before the body is parsed. Otherwise the
/// body is parsed regardless of status, and a malformed body always surfaces as
/// [`Error::Serialization`].
pub(crate) async fn process<T: DeserializeOwned>(
    reporter: &Reporter,
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();
    let reason = reason_phrase(&response);
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(TransportError::Http(e)))?;

    if !status.is_success() {
        let error = Error::Remote {
            status: status.as_u16(),
            reason,
            body: body.clone(),
        };
        reporter.report(None, error).await?;
    }

    decode(&body)
}

/// Reason phrase as sent by the server, falling back to the canonical one.
fn reason_phrase(response: &reqwest::Response) -> String {
    response
        .extensions()
        .get::<hyper::ext::ReasonPhrase>()
        .map(|r| String::from_utf8_lossy(r.as_bytes()).into_owned())
        .or_else(|| response.status().canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unknown".to_string())
}

pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}
