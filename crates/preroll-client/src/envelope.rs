//! Reply envelope of the generate endpoint
//!
//! Success bodies look like `{"output": "..."}`, failures like
//! `{"detail": "..."}`.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Body returned by the generate endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Envelope {
    /// Raw reply text on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Envelope {
    /// Interpret a response body received with `status`
    ///
    /// A success without `output` yields an empty reply. A failure whose
    /// body is not an envelope still yields an endpoint error.
    ///
    /// # Errors
    /// - `ClientError::Endpoint` for non-2xx statuses
    /// - `ClientError::Decode` for a 2xx body that is not an envelope
    pub fn decode(status: u16, body: &str) -> Result<String> {
        let parsed = serde_json::from_str::<Self>(body);
        if !(200..300).contains(&status) {
            let detail = parsed.ok().and_then(|envelope| envelope.detail);
            return Err(ClientError::endpoint(status, detail));
        }
        let envelope = parsed.map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(envelope.output.unwrap_or_default())
    }

    /// Reply text when `text` is itself a saved envelope
    ///
    /// Only objects whose keys are all `output`/`detail` count, so a
    /// reply that is plain JSON is left alone. An envelope carrying only
    /// `detail` is returned as `Err(detail)`.
    pub fn unwrap_saved(text: &str) -> Option<std::result::Result<String, String>> {
        let value: serde_json::Value = serde_json::from_str(text.trim()).ok()?;
        let object = value.as_object()?;
        if object.is_empty() || object.keys().any(|k| k != "output" && k != "detail") {
            return None;
        }
        let envelope: Self = serde_json::from_value(value).ok()?;
        match (envelope.output, envelope.detail) {
            (Some(output), _) => Some(Ok(output)),
            (None, Some(detail)) => Some(Err(detail)),
            (None, None) => None,
        }
    }
}
