use serde::Serialize;
use thiserror::Error;

use crate::models::LoanRequest;
use crate::types::limits::{MAX_AGE, MAX_LOAN_AMOUNT, MAX_LOAN_PERIOD, MIN_AGE, MIN_LOAN_AMOUNT, MIN_LOAN_PERIOD};
use crate::types::{Age, IdentityCodeError, LoanAmount, LoanPeriod};

/// Tag callers branch on when a decision is a rejection.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum DecisionErrorKind {
    InvalidIdentityCode,
    InvalidLoanAmount,
    InvalidLoanPeriod,
    InvalidAge,
    NoValidLoan
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DecisionError {
    #[error("Invalid personal ID code [{identity_code}]: {reason}")]
    InvalidIdentityCode {
        identity_code: String,
        reason: IdentityCodeError
    },
    #[error("Invalid loan amount [{loan_amount}], expected {min} to {max}", min = MIN_LOAN_AMOUNT, max = MAX_LOAN_AMOUNT)]
    InvalidLoanAmount {
        loan_amount: LoanAmount
    },
    #[error("Invalid loan period [{loan_period}], expected {min} to {max} months", min = MIN_LOAN_PERIOD, max = MAX_LOAN_PERIOD)]
    InvalidLoanPeriod {
        loan_period: LoanPeriod
    },
    #[error("Invalid age [{age}] for loan application, expected {min} to {max}", min = MIN_AGE, max = MAX_AGE)]
    InvalidAge {
        age: Age
    },
    #[error("No valid loan found due to existing debt")]
    ExistingDebt,
    #[error("No valid loan period found for amount [{loan_amount}] starting at [{loan_period}] months")]
    NoSuitablePeriod {
        loan_amount: LoanAmount,
        loan_period: LoanPeriod
    }
}

impl DecisionError {
    pub fn invalid_identity_code(request: &LoanRequest, reason: IdentityCodeError) -> Self {
        Self::InvalidIdentityCode { identity_code: request.identity_code.clone(), reason }
    }

    pub fn invalid_loan_amount(request: &LoanRequest) -> Self {
        Self::InvalidLoanAmount { loan_amount: request.loan_amount }
    }

    pub fn invalid_loan_period(request: &LoanRequest) -> Self {
        Self::InvalidLoanPeriod { loan_period: request.loan_period }
    }

    pub fn invalid_age(request: &LoanRequest) -> Self {
        Self::InvalidAge { age: request.age }
    }

    pub fn no_suitable_period(request: &LoanRequest) -> Self {
        Self::NoSuitablePeriod {
            loan_amount: request.loan_amount,
            loan_period: request.loan_period
        }
    }

    pub fn kind(&self) -> DecisionErrorKind {
        match self {
            Self::InvalidIdentityCode { .. } => DecisionErrorKind::InvalidIdentityCode,
            Self::InvalidLoanAmount { .. } => DecisionErrorKind::InvalidLoanAmount,
            Self::InvalidLoanPeriod { .. } => DecisionErrorKind::InvalidLoanPeriod,
            Self::InvalidAge { .. } => DecisionErrorKind::InvalidAge,
            Self::ExistingDebt | Self::NoSuitablePeriod { .. } => DecisionErrorKind::NoValidLoan
        }
    }
}
