use crate::models::{DecisionError, LoanRequest};
use crate::types::limits::{MAX_AGE, MAX_LOAN_AMOUNT, MAX_LOAN_PERIOD, MIN_AGE, MIN_LOAN_AMOUNT, MIN_LOAN_PERIOD};
use crate::types::IdentityCodeValidator;

/// Checks a request against the business bounds.
///
/// Checks run in a fixed order (identity code, amount, period, age) and the
/// first failure is returned.
pub fn validate(request: &LoanRequest, identity_codes: &dyn IdentityCodeValidator) -> Result<(), DecisionError> {
    identity_codes.validate(&request.identity_code)
        .map_err(|reason| DecisionError::invalid_identity_code(request, reason))?;

    if !(MIN_LOAN_AMOUNT..=MAX_LOAN_AMOUNT).contains(&request.loan_amount) {
        return Err(DecisionError::invalid_loan_amount(request))
    }

    if !(MIN_LOAN_PERIOD..=MAX_LOAN_PERIOD).contains(&request.loan_period) {
        return Err(DecisionError::invalid_loan_period(request))
    }

    if !(MIN_AGE..=MAX_AGE).contains(&request.age) {
        return Err(DecisionError::invalid_age(request))
    }

    Ok(())
}
