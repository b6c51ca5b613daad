//! Interpretation of raw predictor output.
//!
//! The endpoint answers with a list of prediction objects; each carries
//! parallel `scores` and `classes` sequences where `scores[i]` is the
//! confidence for `classes[i]`. Only the first prediction is consulted.

use serde_json::Value;

use creditrisk_domain::RiskDecision;

use crate::error::PredictError;

/// Validate the raw prediction shape and reduce it to a risk decision.
///
/// The winning class is the first maximum of `scores`; there is no
/// threshold, smoothing, or secondary tie-break.
pub fn decide(predictions: &[Value]) -> Result<RiskDecision, PredictError> {
    let first = predictions.first().ok_or(PredictError::EmptyResponse)?;

    let record = first
        .as_object()
        .ok_or_else(|| PredictError::malformed(format!("prediction is not an object: {first}")))?;

    let scores = number_seq(record.get("scores")).ok_or_else(|| {
        PredictError::malformed(format!("missing or non-numeric `scores` in {first}"))
    })?;
    let classes = label_seq(record.get("classes")).ok_or_else(|| {
        PredictError::malformed(format!("missing or non-string `classes` in {first}"))
    })?;

    if scores.is_empty() || classes.is_empty() {
        return Err(PredictError::malformed(format!(
            "empty `scores` or `classes` in {first}"
        )));
    }
    if scores.len() != classes.len() {
        return Err(PredictError::malformed(format!(
            "{} scores against {} classes in {first}",
            scores.len(),
            classes.len()
        )));
    }

    let label = &classes[argmax(&scores)];

    RiskDecision::from_label(label).ok_or_else(|| PredictError::UnexpectedLabel(label.clone()))
}

/// Index of the maximum score; ties resolve to the lowest index.
fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = i;
        }
    }
    best
}

fn number_seq(value: Option<&Value>) -> Option<Vec<f64>> {
    value?.as_array()?.iter().map(Value::as_f64).collect()
}

fn label_seq(value: Option<&Value>) -> Option<Vec<String>> {
    value?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_owned))
        .collect()
}
