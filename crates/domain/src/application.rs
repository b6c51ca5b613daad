//! Applicant schema: the raw wire record and the validated application.

use serde::Deserialize;

use crate::error::{FieldViolation, ValidationError};

/// Declares a closed set of exact string literals with parse/display support.
///
/// Matching is exact: no case folding, no trimming. `"male"` is rejected even
/// though `"Male"` is accepted.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $literal:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All accepted literals, in declaration order.
            pub const LITERALS: &'static [&'static str] = &[$($literal),+];

            /// Wire literal for this value.
            pub fn as_str(&self) -> &'static str {
                match self { $(Self::$variant => $literal),+ }
            }
        }

        impl core::str::FromStr for $name {
            type Err = String;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw {
                    $($literal => Ok(Self::$variant),)+
                    other => Err(format!(
                        "unknown value {other:?} (expected one of: {})",
                        Self::LITERALS.join(", ")
                    )),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Applicant gender, as the upstream model encodes it.
    pub enum Gender { Male => "Male", Female => "Female" }
}

string_enum! {
    /// Y/N flag used for marital and self-employment status.
    pub enum YesNo { Yes => "Y", No => "N" }
}

string_enum! {
    pub enum Education { Graduate => "Graduate", Undergraduate => "Undergraduate" }
}

string_enum! {
    /// Credit history flag; string-typed ("1"/"0") in the upstream schema,
    /// not boolean.
    pub enum CreditHistory { Repaid => "1", Defaulted => "0" }
}

string_enum! {
    pub enum PropertyArea { Urban => "Urban", SemiUrban => "Semi Urban", Rural => "Rural" }
}

/// Raw applicant record exactly as received on the wire.
///
/// Values are unchecked here; [`CreditApplication::try_from`] is the only
/// path to a validated entity.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicantRecord {
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Married")]
    pub married: String,
    #[serde(rename = "Dependents")]
    pub dependents: i64,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Self_Employed")]
    pub self_employed: String,
    #[serde(rename = "ApplicantIncome")]
    pub applicant_income: f64,
    #[serde(rename = "CoapplicantIncome")]
    pub coapplicant_income: f64,
    #[serde(rename = "LoanAmount")]
    pub loan_amount: f64,
    #[serde(rename = "Loan_Amount_Term")]
    pub loan_amount_term: f64,
    #[serde(rename = "Credit_History")]
    pub credit_history: String,
    #[serde(rename = "Property_Area")]
    pub property_area: String,
}

/// Validated, immutable loan application.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditApplication {
    gender: Gender,
    married: YesNo,
    dependents: u64,
    education: Education,
    self_employed: YesNo,
    applicant_income: f64,
    coapplicant_income: f64,
    loan_amount: f64,
    loan_amount_term: f64,
    credit_history: CreditHistory,
    property_area: PropertyArea,
}

impl CreditApplication {
    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn married(&self) -> YesNo {
        self.married
    }

    pub fn dependents(&self) -> u64 {
        self.dependents
    }

    pub fn education(&self) -> Education {
        self.education
    }

    pub fn self_employed(&self) -> YesNo {
        self.self_employed
    }

    pub fn applicant_income(&self) -> f64 {
        self.applicant_income
    }

    pub fn coapplicant_income(&self) -> f64 {
        self.coapplicant_income
    }

    pub fn loan_amount(&self) -> f64 {
        self.loan_amount
    }

    pub fn loan_amount_term(&self) -> f64 {
        self.loan_amount_term
    }

    pub fn credit_history(&self) -> CreditHistory {
        self.credit_history
    }

    pub fn property_area(&self) -> PropertyArea {
        self.property_area
    }
}

impl TryFrom<ApplicantRecord> for CreditApplication {
    type Error = ValidationError;

    /// Validate every field and report all violations together, not just the
    /// first one.
    fn try_from(record: ApplicantRecord) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        let gender = literal::<Gender>("Gender", &record.gender, &mut violations);
        let married = literal::<YesNo>("Married", &record.married, &mut violations);
        let dependents = non_negative_int("Dependents", record.dependents, &mut violations);
        let education = literal::<Education>("Education", &record.education, &mut violations);
        let self_employed = literal::<YesNo>("Self_Employed", &record.self_employed, &mut violations);
        let applicant_income =
            non_negative("ApplicantIncome", record.applicant_income, &mut violations);
        let coapplicant_income =
            non_negative("CoapplicantIncome", record.coapplicant_income, &mut violations);
        let loan_amount = non_negative("LoanAmount", record.loan_amount, &mut violations);
        let loan_amount_term =
            non_negative("Loan_Amount_Term", record.loan_amount_term, &mut violations);
        let credit_history =
            literal::<CreditHistory>("Credit_History", &record.credit_history, &mut violations);
        let property_area =
            literal::<PropertyArea>("Property_Area", &record.property_area, &mut violations);

        let application = (|| {
            Some(Self {
                gender: gender?,
                married: married?,
                dependents: dependents?,
                education: education?,
                self_employed: self_employed?,
                applicant_income: applicant_income?,
                coapplicant_income: coapplicant_income?,
                loan_amount: loan_amount?,
                loan_amount_term: loan_amount_term?,
                credit_history: credit_history?,
                property_area: property_area?,
            })
        })();

        application.ok_or_else(|| ValidationError::new(violations))
    }
}

fn literal<T: core::str::FromStr<Err = String>>(
    field: &'static str,
    raw: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(message) => {
            violations.push(FieldViolation { field, message });
            None
        }
    }
}

fn non_negative_int(
    field: &'static str,
    value: i64,
    violations: &mut Vec<FieldViolation>,
) -> Option<u64> {
    if value < 0 {
        violations.push(FieldViolation {
            field,
            message: format!("must be non-negative, got {value}"),
        });
        return None;
    }
    Some(value as u64)
}

fn non_negative(
    field: &'static str,
    value: f64,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    if value < 0.0 {
        violations.push(FieldViolation {
            field,
            message: format!("must be non-negative, got {value}"),
        });
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ApplicantRecord {
        ApplicantRecord {
            gender: "Male".to_string(),
            married: "Y".to_string(),
            dependents: 2,
            education: "Graduate".to_string(),
            self_employed: "N".to_string(),
            applicant_income: 5000.0,
            coapplicant_income: 1500.0,
            loan_amount: 128.0,
            loan_amount_term: 360.0,
            credit_history: "1".to_string(),
            property_area: "Urban".to_string(),
        }
    }

    #[test]
    fn valid_record_builds_application() {
        let application = CreditApplication::try_from(sample_record()).unwrap();

        assert_eq!(application.gender(), Gender::Male);
        assert_eq!(application.married(), YesNo::Yes);
        assert_eq!(application.dependents(), 2);
        assert_eq!(application.education(), Education::Graduate);
        assert_eq!(application.self_employed(), YesNo::No);
        assert_eq!(application.credit_history(), CreditHistory::Repaid);
        assert_eq!(application.property_area(), PropertyArea::Urban);
    }

    #[test]
    fn literal_matching_is_exact() {
        let mut record = sample_record();
        record.gender = "male".to_string();

        let err = CreditApplication::try_from(record).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field, "Gender");
        assert!(err.violations()[0].message.contains("male"));
    }

    #[test]
    fn unknown_property_area_is_rejected() {
        let mut record = sample_record();
        record.property_area = "Suburb".to_string();

        let err = CreditApplication::try_from(record).unwrap_err();
        assert_eq!(err.violations()[0].field, "Property_Area");
        assert!(err.violations()[0].message.contains("Semi Urban"));
    }

    #[test]
    fn semi_urban_literal_contains_a_space() {
        let mut record = sample_record();
        record.property_area = "Semi Urban".to_string();

        let application = CreditApplication::try_from(record).unwrap();
        assert_eq!(application.property_area(), PropertyArea::SemiUrban);
    }

    #[test]
    fn negative_income_is_rejected() {
        let mut record = sample_record();
        record.applicant_income = -1.0;

        let err = CreditApplication::try_from(record).unwrap_err();
        assert_eq!(err.violations()[0].field, "ApplicantIncome");
    }

    #[test]
    fn negative_dependents_is_rejected() {
        let mut record = sample_record();
        record.dependents = -3;

        let err = CreditApplication::try_from(record).unwrap_err();
        assert_eq!(err.violations()[0].field, "Dependents");
    }

    #[test]
    fn zero_values_are_accepted() {
        let mut record = sample_record();
        record.dependents = 0;
        record.applicant_income = 0.0;
        record.coapplicant_income = 0.0;
        record.loan_amount = 0.0;
        record.loan_amount_term = 0.0;

        assert!(CreditApplication::try_from(record).is_ok());
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut record = sample_record();
        record.gender = "male".to_string();
        record.married = "maybe".to_string();
        record.applicant_income = -200.0;

        let err = CreditApplication::try_from(record).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["Gender", "Married", "ApplicantIncome"]);
    }

    #[test]
    fn record_deserializes_from_wire_field_names() {
        let record: ApplicantRecord = serde_json::from_value(serde_json::json!({
            "Gender": "Female",
            "Married": "N",
            "Dependents": 1,
            "Education": "Undergraduate",
            "Self_Employed": "Y",
            "ApplicantIncome": 2400.5,
            "CoapplicantIncome": 0.0,
            "LoanAmount": 90.0,
            "Loan_Amount_Term": 180.0,
            "Credit_History": "0",
            "Property_Area": "Rural"
        }))
        .unwrap();

        let application = CreditApplication::try_from(record).unwrap();
        assert_eq!(application.gender(), Gender::Female);
        assert_eq!(application.education(), Education::Undergraduate);
        assert_eq!(application.credit_history(), CreditHistory::Defaulted);
        assert_eq!(application.property_area(), PropertyArea::Rural);
    }
}
