use crate::types::limits::{APPROVAL_THRESHOLD, MAX_LOAN_PERIOD};
use crate::types::{CreditModifier, LoanAmount, LoanPeriod};

/// `modifier / amount * period`, in floating point.
///
/// Callers guarantee a non-zero amount; validation rejects anything below the minimum.
pub fn credit_score(modifier: CreditModifier, loan_amount: LoanAmount, loan_period: LoanPeriod) -> f64 {
    modifier as f64 / loan_amount as f64 * f64::from(loan_period)
}

pub fn is_creditworthy(score: f64) -> bool {
    score >= APPROVAL_THRESHOLD
}

/// Returns the smallest period in `start_period..=MAX_LOAN_PERIOD` that reaches the
/// approval threshold.
///
/// The search only ever lengthens the period; it never shortens it and never
/// touches the amount.
pub fn find_suitable_period(modifier: CreditModifier, loan_amount: LoanAmount, start_period: LoanPeriod) -> Option<LoanPeriod> {
    (start_period..=MAX_LOAN_PERIOD)
        .find(|&period| is_creditworthy(credit_score(modifier, loan_amount, period)))
}
