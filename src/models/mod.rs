mod credit_segment;
mod decision;
mod errors;
mod loan_request;
#[cfg(test)]
mod tests;

pub use credit_segment::CreditSegment;
pub use decision::{Decision, DecisionRecord, EvaluatedApplication};
pub use errors::{DecisionError, DecisionErrorKind};
pub use loan_request::{LoanApplication, LoanRequest};
