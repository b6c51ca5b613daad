//! Validation error model.

use thiserror::Error;

/// A single field that failed schema validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire-level field name (e.g. `Property_Area`).
    pub field: &'static str,
    pub message: String,
}

impl core::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Schema validation failure carrying every violating field.
///
/// Construction of a [`crate::CreditApplication`] is all-or-nothing: either
/// the whole record satisfies the schema, or this error lists each offending
/// field. There are no partially validated entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", summary(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

fn summary(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_violation() {
        let err = ValidationError::new(vec![
            FieldViolation {
                field: "Gender",
                message: "unknown value \"male\"".to_string(),
            },
            FieldViolation {
                field: "ApplicantIncome",
                message: "must be non-negative, got -1".to_string(),
            },
        ]);

        let rendered = err.to_string();
        assert!(rendered.starts_with("validation failed: "));
        assert!(rendered.contains("Gender"));
        assert!(rendered.contains("ApplicantIncome"));
    }
}
