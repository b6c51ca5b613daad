//! Outbound payload construction for the remote predictor.

use serde::Serialize;

use crate::application::CreditApplication;
use crate::id::LoanId;

/// Flat, all-string instance record in the exact shape the remote tabular
/// model expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionPayload {
    #[serde(rename = "Loan_ID")]
    pub loan_id: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Married")]
    pub married: String,
    #[serde(rename = "Dependents")]
    pub dependents: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Self_Employed")]
    pub self_employed: String,
    #[serde(rename = "ApplicantIncome")]
    pub applicant_income: String,
    #[serde(rename = "CoapplicantIncome")]
    pub coapplicant_income: String,
    #[serde(rename = "LoanAmount")]
    pub loan_amount: String,
    #[serde(rename = "Loan_Amount_Term")]
    pub loan_amount_term: String,
    #[serde(rename = "Credit_History")]
    pub credit_history: String,
    #[serde(rename = "Property_Area")]
    pub property_area: String,
}

impl PredictionPayload {
    /// Build the payload for one validated application.
    ///
    /// Every value is stringified with its plain display form; the only
    /// non-deterministic part is the synthesized `Loan_ID`. This step cannot
    /// fail.
    pub fn for_application(application: &CreditApplication) -> Self {
        Self {
            loan_id: LoanId::generate().into(),
            gender: application.gender().to_string(),
            married: application.married().to_string(),
            dependents: application.dependents().to_string(),
            education: application.education().to_string(),
            self_employed: application.self_employed().to_string(),
            applicant_income: application.applicant_income().to_string(),
            coapplicant_income: application.coapplicant_income().to_string(),
            loan_amount: application.loan_amount().to_string(),
            loan_amount_term: application.loan_amount_term().to_string(),
            credit_history: application.credit_history().to_string(),
            property_area: application.property_area().to_string(),
        }
    }
}
