use std::collections::HashMap;

use tracing::warn;

use crate::models::CreditSegment;

const SEGMENT_DIGITS: usize = 4;

/// Identity codes pinned to a fixed segment, consulted before the general rule.
#[derive(Debug, Clone)]
pub struct SegmentOverrides {
    entries: HashMap<String, CreditSegment>
}

impl SegmentOverrides {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new()
        }
    }

    pub fn with(mut self, identity_code: impl Into<String>, segment: CreditSegment) -> Self {
        self.entries.insert(identity_code.into(), segment);
        self
    }

    pub fn get(&self, identity_code: &str) -> Option<CreditSegment> {
        self.entries.get(identity_code).copied()
    }
}

impl Default for SegmentOverrides {
    /// Fixture customers, one per segment.
    fn default() -> Self {
        Self::empty()
            .with("49002010965", CreditSegment::Debt)
            .with("49002010976", CreditSegment::Segment1)
            .with("49002010987", CreditSegment::Segment2)
            .with("49002010998", CreditSegment::Segment3)
    }
}

/// Resolves the credit segment of an identity code.
///
/// Codes whose last four characters are not digits never pass validation; they
/// resolve to [`CreditSegment::Debt`] so they can never be approved.
pub fn resolve_segment(identity_code: &str, overrides: &SegmentOverrides) -> CreditSegment {
    if let Some(segment) = overrides.get(identity_code) {
        return segment
    }

    let digits = identity_code.len().checked_sub(SEGMENT_DIGITS)
        .and_then(|start| identity_code.get(start..))
        .filter(|tail| tail.bytes().all(|byte| byte.is_ascii_digit()))
        .and_then(|tail| tail.parse::<u16>().ok());

    match digits {
        Some(digits) => CreditSegment::from_segment_digits(digits),
        None => {
            warn!("Identity code [{identity_code}] has no numeric segment digits, treating as debt");
            CreditSegment::Debt
        }
    }
}
