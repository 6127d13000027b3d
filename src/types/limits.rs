//! Business bounds fixed at deployment.

use crate::types::{Age, CreditModifier, LoanAmount, LoanPeriod};

pub const MIN_LOAN_AMOUNT: LoanAmount = 2_000;
pub const MAX_LOAN_AMOUNT: LoanAmount = 10_000;

pub const MIN_LOAN_PERIOD: LoanPeriod = 12;
pub const MAX_LOAN_PERIOD: LoanPeriod = 60;

pub const MIN_AGE: Age = 18;
pub const LIFE_EXPECTANCY: Age = 80;
/// Oldest applicant whose longest possible loan still ends within the assumed life expectancy.
pub const MAX_AGE: Age = LIFE_EXPECTANCY - MAX_LOAN_PERIOD / 12;

pub const SEGMENT_1_CREDIT_MODIFIER: CreditModifier = 100;
pub const SEGMENT_2_CREDIT_MODIFIER: CreditModifier = 300;
pub const SEGMENT_3_CREDIT_MODIFIER: CreditModifier = 1_000;

pub const APPROVAL_THRESHOLD: f64 = 1.0;
