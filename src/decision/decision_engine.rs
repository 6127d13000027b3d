use tracing::{debug, trace};

use crate::decision::{credit_score, find_suitable_period, is_creditworthy, resolve_segment, validate, SegmentOverrides};
use crate::models::{CreditSegment, Decision, DecisionError, LoanRequest};
use crate::types::{EstonianPersonalCodeValidator, IdentityCodeValidator, LoanAmount, LoanPeriod};

/// Stateless loan decision engine.
///
/// Holds only immutable configuration, so a single instance can be shared across
/// threads. Every per-request value (segment, modifier, score) lives on the stack
/// of the call that computed it.
pub struct DecisionEngine {
    identity_codes: Box<dyn IdentityCodeValidator>,
    overrides: SegmentOverrides
}

impl DecisionEngine {
    /// Creates an engine validating Estonian personal codes with the fixture overrides.
    pub fn new() -> Self {
        Self {
            identity_codes: Box::new(EstonianPersonalCodeValidator),
            overrides: SegmentOverrides::default()
        }
    }

    pub fn with_overrides(mut self, overrides: SegmentOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_identity_code_validator(mut self, validator: impl IdentityCodeValidator) -> Self {
        self.identity_codes = Box::new(validator);
        self
    }

    pub fn resolve_segment(&self, identity_code: &str) -> CreditSegment {
        resolve_segment(identity_code, &self.overrides)
    }

    /// Evaluates a request and returns exactly one approval or rejection.
    ///
    /// The approved amount is always the requested amount; only the period is
    /// lengthened to reach approval.
    pub fn evaluate(&self, request: &LoanRequest) -> Decision {
        match self.assess(request) {
            Ok((loan_amount, loan_period)) => {
                debug!("Loan approved for [{loan_amount}] over [{loan_period}] months (requested [{}])", request.loan_period);
                Decision::approved(loan_amount, loan_period)
            }
            Err(error) => {
                debug!("Loan rejected [{:?}]: {error}", error.kind());
                Decision::Rejected(error)
            }
        }
    }

    fn assess(&self, request: &LoanRequest) -> Result<(LoanAmount, LoanPeriod), DecisionError> {
        validate(request, &*self.identity_codes)?;

        let segment = self.resolve_segment(&request.identity_code);

        if segment.is_debt() {
            return Err(DecisionError::ExistingDebt)
        }

        let modifier = segment.modifier();
        let score = credit_score(modifier, request.loan_amount, request.loan_period);

        if is_creditworthy(score) {
            return Ok((request.loan_amount, request.loan_period))
        }

        let loan_period = find_suitable_period(modifier, request.loan_amount, request.loan_period)
            .ok_or_else(|| DecisionError::no_suitable_period(request))?;

        trace!(
            "Period extended from [{}] to [{loan_period}] months, score [{score:.4}] -> [{:.4}]",
            request.loan_period,
            credit_score(modifier, request.loan_amount, loan_period)
        );

        Ok((request.loan_amount, loan_period))
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}
