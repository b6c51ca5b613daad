use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use creditrisk_domain::ValidationError;
use creditrisk_predictor::PredictError;

pub fn validation_error_to_response(err: &ValidationError) -> axum::response::Response {
    json_error(
        StatusCode::UNPROCESSABLE_ENTITY,
        "validation_error",
        err.to_string(),
    )
}

pub fn predict_error_to_response(err: &PredictError) -> axum::response::Response {
    let code = match err {
        PredictError::Service(_) => "prediction_service_error",
        PredictError::EmptyResponse => "empty_prediction_response",
        PredictError::MalformedResponse(_) => "malformed_prediction_response",
        PredictError::UnexpectedLabel(_) => "unexpected_class_label",
    };
    json_error(StatusCode::INTERNAL_SERVER_ERROR, code, err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    detail: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "detail": detail.into(),
        })),
    )
        .into_response()
}
