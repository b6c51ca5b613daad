//! `creditrisk-domain` — pure domain types for the credit-risk API.
//!
//! This crate contains the validated applicant entity, outbound payload
//! construction, and the binary risk decision. No I/O or framework concerns.

pub mod application;
pub mod decision;
pub mod error;
pub mod id;
pub mod payload;

pub use application::{
    ApplicantRecord, CreditApplication, CreditHistory, Education, Gender, PropertyArea, YesNo,
};
pub use decision::RiskDecision;
pub use error::{FieldViolation, ValidationError};
pub use id::LoanId;
pub use payload::PredictionPayload;
