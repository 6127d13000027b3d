use crate::types::limits::{SEGMENT_1_CREDIT_MODIFIER, SEGMENT_2_CREDIT_MODIFIER, SEGMENT_3_CREDIT_MODIFIER};
use crate::types::CreditModifier;

/// Credit bucket a customer falls into, derived from their identity code.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CreditSegment {
    /// Customer has outstanding debt, no credit is extended.
    Debt,
    Segment1,
    Segment2,
    Segment3
}

impl CreditSegment {
    /// Maps the numeric value of an identity code's last four digits onto a segment.
    ///
    /// ```text
    /// Debt     - 0000...2499
    /// Segment1 - 2500...4999
    /// Segment2 - 5000...7499
    /// Segment3 - 7500...9999
    /// ```
    pub fn from_segment_digits(digits: u16) -> Self {
        match digits {
            0..2_500 => Self::Debt,
            2_500..5_000 => Self::Segment1,
            5_000..7_500 => Self::Segment2,
            _ => Self::Segment3
        }
    }

    pub fn modifier(self) -> CreditModifier {
        match self {
            Self::Debt => 0,
            Self::Segment1 => SEGMENT_1_CREDIT_MODIFIER,
            Self::Segment2 => SEGMENT_2_CREDIT_MODIFIER,
            Self::Segment3 => SEGMENT_3_CREDIT_MODIFIER
        }
    }

    pub fn is_debt(self) -> bool {
        self == Self::Debt
    }
}
