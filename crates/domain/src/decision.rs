//! Binary risk outcome.

/// Risk decision for the front-end: 1 = low risk, 0 = high risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskDecision {
    LowRisk,
    HighRisk,
}

impl RiskDecision {
    /// Map a classifier label to a decision, case-insensitively.
    ///
    /// "Y" means the loan was approved in the training data (low risk), "N"
    /// declined (high risk). Anything else is outside the model vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case("Y") {
            Some(Self::LowRisk)
        } else if label.eq_ignore_ascii_case("N") {
            Some(Self::HighRisk)
        } else {
            None
        }
    }

    /// Wire flag of the front-end contract.
    pub fn flag(&self) -> u8 {
        match self {
            Self::LowRisk => 1,
            Self::HighRisk => 0,
        }
    }
}
