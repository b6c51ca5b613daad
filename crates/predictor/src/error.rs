//! Prediction failure taxonomy.

use thiserror::Error;

/// Errors from the remote predictor call or its response interpretation.
///
/// Nothing here is retried or recovered; the request handler translates each
/// variant into one error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// The remote call itself failed: network error, timeout, non-2xx
    /// status, or an undecodable body.
    #[error("prediction service call failed: {0}")]
    Service(String),

    /// The call succeeded but returned no predictions.
    #[error("empty prediction response")]
    EmptyResponse,

    /// The call succeeded but the prediction shape is unusable.
    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),

    /// The winning class label is outside the expected {Y, N} vocabulary.
    #[error("unexpected class label: {0:?}")]
    UnexpectedLabel(String),
}

impl PredictError {
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}
