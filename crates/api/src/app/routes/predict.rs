use std::sync::Arc;

use axum::Json;
use axum::extract::Extension;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde_json::json;

use creditrisk_domain::{ApplicantRecord, CreditApplication, PredictionPayload};
use creditrisk_predictor::{Predictor, interpret};

use crate::app::{dto, errors};

/// `POST /predict`: validate, build the payload, call the model, interpret.
///
/// The first failing stage short-circuits into one error response; a failure
/// never becomes a fallback prediction.
pub async fn predict(
    Extension(predictor): Extension<Arc<dyn Predictor>>,
    Json(record): Json<ApplicantRecord>,
) -> axum::response::Response {
    let application = match CreditApplication::try_from(record) {
        Ok(application) => application,
        Err(e) => return errors::validation_error_to_response(&e),
    };

    let payload = PredictionPayload::for_application(&application);

    let predictions = match predictor.predict(payload).await {
        Ok(predictions) => predictions,
        Err(e) => return errors::predict_error_to_response(&e),
    };

    tracing::debug!(?predictions, "raw predictor response");

    match interpret::decide(&predictions) {
        Ok(decision) => (
            StatusCode::OK,
            Json(dto::PredictResponse {
                prediction: decision.flag(),
            }),
        )
            .into_response(),
        Err(e) => errors::predict_error_to_response(&e),
    }
}

/// `OPTIONS /predict`: explicit preflight response.
pub async fn preflight() -> axum::response::Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_MAX_AGE, "3600"),
        ],
        Json(json!({ "message": "ok" })),
    )
        .into_response()
}
