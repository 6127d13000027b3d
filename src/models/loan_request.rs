use serde::Deserialize;

use crate::types::{Age, ApplicationId, LoanAmount, LoanPeriod};

/// Inputs of a single decision. Built per call and never shared between calls.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LoanRequest {
    pub identity_code: String,
    /// Requested amount in whole currency units.
    pub loan_amount: LoanAmount,
    /// Requested period in months.
    pub loan_period: LoanPeriod,
    /// Applicant age in years.
    pub age: Age
}

impl LoanRequest {
    pub fn new(identity_code: impl Into<String>, loan_amount: LoanAmount, loan_period: LoanPeriod, age: Age) -> Self {
        Self {
            identity_code: identity_code.into(),
            loan_amount,
            loan_period,
            age
        }
    }
}

/// Represents a single row from the input CSV file.
///
/// Numeric columns are signed so out-of-range values are reported by the
/// validator rather than dropped during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanApplication {
    #[serde(rename = "id")]
    pub application_id: ApplicationId,
    #[serde(rename = "personal_code")]
    pub identity_code: String,
    pub loan_amount: LoanAmount,
    pub loan_period: LoanPeriod,
    pub age: Age
}

impl LoanApplication {
    pub fn request(&self) -> LoanRequest {
        LoanRequest::new(self.identity_code.clone(), self.loan_amount, self.loan_period, self.age)
    }
}
