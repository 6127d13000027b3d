use super::{CreditSegment, Decision, DecisionError, DecisionErrorKind, DecisionRecord, EvaluatedApplication, LoanApplication, LoanRequest};

use anyhow::Result;
use csv::{ReaderBuilder, Trim};

use crate::types::IdentityCodeError;

#[test]
fn test_segment_boundaries_follow_last_four_digits() {
    assert_eq!(CreditSegment::from_segment_digits(0), CreditSegment::Debt);
    assert_eq!(CreditSegment::from_segment_digits(2499), CreditSegment::Debt);
    assert_eq!(CreditSegment::from_segment_digits(2500), CreditSegment::Segment1);
    assert_eq!(CreditSegment::from_segment_digits(4999), CreditSegment::Segment1);
    assert_eq!(CreditSegment::from_segment_digits(5000), CreditSegment::Segment2);
    assert_eq!(CreditSegment::from_segment_digits(7499), CreditSegment::Segment2);
    assert_eq!(CreditSegment::from_segment_digits(7500), CreditSegment::Segment3);
    assert_eq!(CreditSegment::from_segment_digits(9999), CreditSegment::Segment3);
}

#[test]
fn test_only_debt_segment_has_zero_modifier() {
    assert_eq!(CreditSegment::Debt.modifier(), 0);
    assert!(CreditSegment::Debt.is_debt());

    for segment in [CreditSegment::Segment1, CreditSegment::Segment2, CreditSegment::Segment3] {
        assert!(segment.modifier() > 0);
        assert!(!segment.is_debt());
    }

    assert!(CreditSegment::Segment1.modifier() < CreditSegment::Segment2.modifier());
    assert!(CreditSegment::Segment2.modifier() < CreditSegment::Segment3.modifier());
}

#[test]
fn test_approved_decision_exposes_only_terms() {
    let decision = Decision::approved(4000, 14);

    assert!(decision.is_approved());
    assert_eq!(decision.loan_amount(), Some(4000));
    assert_eq!(decision.loan_period(), Some(14));
    assert!(decision.error().is_none());
    assert!(decision.error_kind().is_none());
}

#[test]
fn test_rejected_decision_exposes_only_error() {
    let decision = Decision::from(DecisionError::ExistingDebt);

    assert!(!decision.is_approved());
    assert!(decision.loan_amount().is_none());
    assert!(decision.loan_period().is_none());
    assert_eq!(decision.error_kind(), Some(DecisionErrorKind::NoValidLoan));
}

#[test]
fn test_error_kinds_and_messages() {
    let request = LoanRequest::new("49002010966", 1999, 61, 76);

    let identity = DecisionError::invalid_identity_code(&request, IdentityCodeError::ChecksumMismatch { expected: 5, actual: 6 });
    assert_eq!(identity.kind(), DecisionErrorKind::InvalidIdentityCode);
    assert_eq!(identity.to_string(), "Invalid personal ID code [49002010966]: check digit [6] does not match expected [5]");

    let amount = DecisionError::invalid_loan_amount(&request);
    assert_eq!(amount.kind(), DecisionErrorKind::InvalidLoanAmount);
    assert_eq!(amount.to_string(), "Invalid loan amount [1999], expected 2000 to 10000");

    let period = DecisionError::invalid_loan_period(&request);
    assert_eq!(period.kind(), DecisionErrorKind::InvalidLoanPeriod);
    assert_eq!(period.to_string(), "Invalid loan period [61], expected 12 to 60 months");

    let age = DecisionError::invalid_age(&request);
    assert_eq!(age.kind(), DecisionErrorKind::InvalidAge);
    assert_eq!(age.to_string(), "Invalid age [76] for loan application, expected 18 to 75");

    let no_period = DecisionError::no_suitable_period(&request);
    assert_eq!(no_period.kind(), DecisionErrorKind::NoValidLoan);
    assert_eq!(DecisionError::ExistingDebt.to_string(), "No valid loan found due to existing debt");
}

#[test]
fn test_decision_display() {
    assert_eq!(Decision::approved(4000, 14).to_string(), "approved [4000] over [14] months");
    assert_eq!(
        Decision::Rejected(DecisionError::ExistingDebt).to_string(),
        "rejected [NoValidLoan]: No valid loan found due to existing debt"
    );
}

#[test]
fn test_loan_application_deserializes_from_csv() -> Result<()> {
    let input = "id,personal_code,loan_amount,loan_period,age\n7, 49002010987 ,4000,12,30\n8,49002010998,-1,0,-3";
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input.as_bytes());

    let applications = reader.deserialize::<LoanApplication>().collect::<Result<Vec<_>, _>>()?;

    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].application_id, 7);
    assert_eq!(applications[0].request(), LoanRequest::new("49002010987", 4000, 12, 30));
    assert_eq!(applications[1].request(), LoanRequest::new("49002010998", -1, 0, -3));

    Ok(())
}

#[test]
fn test_decision_record_populates_one_side_only() {
    let application = LoanApplication {
        application_id: 5,
        identity_code: "49002010987".to_string(),
        loan_amount: 4000,
        loan_period: 12,
        age: 30
    };

    let approved = EvaluatedApplication::new(application.clone(), Decision::approved(4000, 14));
    let record = DecisionRecord::from(&approved);

    assert_eq!(record.id, 5);
    assert_eq!(record.status, "approved");
    assert_eq!((record.loan_amount, record.loan_period), (Some(4000), Some(14)));
    assert!(record.error_kind.is_none() && record.error_message.is_none());

    let rejected = EvaluatedApplication::new(application, Decision::Rejected(DecisionError::ExistingDebt));
    let record = DecisionRecord::from(&rejected);

    assert_eq!(record.status, "rejected");
    assert!(record.loan_amount.is_none() && record.loan_period.is_none());
    assert_eq!(record.error_kind, Some(DecisionErrorKind::NoValidLoan));
    assert_eq!(record.error_message.as_deref(), Some("No valid loan found due to existing debt"));
}
