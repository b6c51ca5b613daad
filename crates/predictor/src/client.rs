//! Remote predictor capability.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use creditrisk_domain::PredictionPayload;

use crate::error::PredictError;

/// Narrow seam to the external classifier.
///
/// The rest of the system only sees "payload in, raw predictions out", so
/// the request handler and interpreter are testable without a network.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Send one instance and return the raw `predictions` array.
    async fn predict(&self, instance: PredictionPayload) -> Result<Vec<Value>, PredictError>;
}

/// Connection settings for a managed Vertex AI endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexConfig {
    pub project_id: String,
    pub location: String,
    pub endpoint_id: String,
    /// Bearer token, when the endpoint is not reachable anonymously.
    pub auth_token: Option<String>,
    /// Hard cap on the round-trip to the endpoint.
    pub timeout: Duration,
}

impl VertexConfig {
    /// Fully qualified resource name of the endpoint.
    pub fn endpoint_name(&self) -> String {
        format!(
            "projects/{}/locations/{}/endpoints/{}",
            self.project_id, self.location, self.endpoint_id
        )
    }
}

/// [`Predictor`] backed by the Vertex AI REST `:predict` method.
#[derive(Debug, Clone)]
pub struct VertexPredictor {
    http: reqwest::Client,
    config: VertexConfig,
}

#[derive(Debug, Deserialize)]
struct PredictResponseBody {
    #[serde(default)]
    predictions: Vec<Value>,
}

impl VertexPredictor {
    /// Build the client with the configured transport timeout.
    pub fn new(config: VertexConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// URL of the `:predict` method for the configured endpoint.
    pub fn predict_url(&self) -> String {
        format!(
            "https://{}-aiplatform.googleapis.com/v1/{}:predict",
            self.config.location,
            self.config.endpoint_name()
        )
    }
}

#[async_trait]
impl Predictor for VertexPredictor {
    /// One request, no retry. A failed call is terminal for the request that
    /// triggered it.
    async fn predict(&self, instance: PredictionPayload) -> Result<Vec<Value>, PredictError> {
        let url = self.predict_url();

        let mut request = self.http.post(&url).json(&json!({ "instances": [instance] }));
        if let Some(token) = &self.config.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PredictError::service(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictError::service(format!(
                "endpoint returned {status}: {body}"
            )));
        }

        let body: PredictResponseBody = response
            .json()
            .await
            .map_err(|e| PredictError::service(format!("undecodable response body: {e}")))?;

        tracing::debug!(count = body.predictions.len(), "received predictions");

        Ok(body.predictions)
    }
}
