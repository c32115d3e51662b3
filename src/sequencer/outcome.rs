//! Draw results and the outcome of a single sequence activation

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// The payload the draw endpoint answers with on success
///
/// Only `id` is consumed. The service serializes ids as JSON strings or
/// numbers depending on its storage backend; both are accepted here, and
/// anything else is a payload failure.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct DrawResult {
    #[serde(deserialize_with = "id_from_scalar")]
    pub id: String,
}

pub(crate) fn id_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => Ok(s),
        Scalar::Int(n) => Ok(n.to_string()),
        Scalar::Float(n) => Ok(n.to_string()),
    }
}

/// Why a draw fetch failed
///
/// All variants collapse into the same user-visible "no topics" outcome;
/// the distinction only feeds the diagnostic side channel.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The service answered with a non-success HTTP status
    #[error("draw service returned HTTP {0}")]
    Status(u16),
    /// The request never produced a usable response (includes timeouts)
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected draw payload
    #[error("unexpected draw payload: {0}")]
    Payload(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Payload(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// The single outcome produced per activation, consumed immediately to
/// drive the terminal action
#[derive(Debug)]
pub enum SequenceOutcome {
    /// Both operations settled and the fetch produced a result
    Success(DrawResult),
    /// The fetch failed; the timer never causes failure on its own
    Failure(FetchError),
}
