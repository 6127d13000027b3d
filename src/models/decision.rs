use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::models::{DecisionError, DecisionErrorKind, LoanApplication};
use crate::types::{ApplicationId, LoanAmount, LoanPeriod};

/// Outcome of a single evaluation: either an approval or a typed rejection, never both.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Decision {
    Approved {
        loan_amount: LoanAmount,
        loan_period: LoanPeriod
    },
    Rejected(DecisionError)
}

impl Decision {
    pub fn approved(loan_amount: LoanAmount, loan_period: LoanPeriod) -> Self {
        Self::Approved { loan_amount, loan_period }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    pub fn loan_amount(&self) -> Option<LoanAmount> {
        match self {
            Self::Approved { loan_amount, .. } => Some(*loan_amount),
            Self::Rejected(_) => None
        }
    }

    pub fn loan_period(&self) -> Option<LoanPeriod> {
        match self {
            Self::Approved { loan_period, .. } => Some(*loan_period),
            Self::Rejected(_) => None
        }
    }

    pub fn error(&self) -> Option<&DecisionError> {
        match self {
            Self::Approved { .. } => None,
            Self::Rejected(error) => Some(error)
        }
    }

    pub fn error_kind(&self) -> Option<DecisionErrorKind> {
        self.error().map(DecisionError::kind)
    }
}

impl From<DecisionError> for Decision {
    fn from(error: DecisionError) -> Self {
        Self::Rejected(error)
    }
}

impl Display for Decision {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved { loan_amount, loan_period } => {
                write!(formatter, "approved [{loan_amount}] over [{loan_period}] months")
            }
            Self::Rejected(error) => write!(formatter, "rejected [{:?}]: {error}", error.kind())
        }
    }
}

/// A decision paired with the application it was made for.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EvaluatedApplication {
    pub application_id: ApplicationId,
    pub identity_code: String,
    pub decision: Decision
}

impl EvaluatedApplication {
    pub fn new(application: LoanApplication, decision: Decision) -> Self {
        Self {
            application_id: application.application_id,
            identity_code: application.identity_code,
            decision
        }
    }
}

/// Represents a single row of the output CSV.
#[derive(Debug, Serialize)]
pub struct DecisionRecord<'a> {
    pub id: ApplicationId,
    pub personal_code: &'a str,
    pub status: &'static str,
    pub loan_amount: Option<LoanAmount>,
    pub loan_period: Option<LoanPeriod>,
    pub error_kind: Option<DecisionErrorKind>,
    pub error_message: Option<String>
}

impl DecisionRecord<'_> {
    pub const HEADERS: [&'static str; 7] = [
        "id",
        "personal_code",
        "status",
        "loan_amount",
        "loan_period",
        "error_kind",
        "error_message"
    ];
}

impl<'a> From<&'a EvaluatedApplication> for DecisionRecord<'a> {
    fn from(evaluated: &'a EvaluatedApplication) -> Self {
        let decision = &evaluated.decision;

        Self {
            id: evaluated.application_id,
            personal_code: &evaluated.identity_code,
            status: if decision.is_approved() { "approved" } else { "rejected" },
            loan_amount: decision.loan_amount(),
            loan_period: decision.loan_period(),
            error_kind: decision.error_kind(),
            error_message: decision.error().map(ToString::to_string)
        }
    }
}
