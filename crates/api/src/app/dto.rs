use serde::Serialize;

/// Successful prediction body for the front-end.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// 1 = low risk, 0 = high risk.
    pub prediction: u8,
}
