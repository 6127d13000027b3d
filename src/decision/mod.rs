mod decision_engine;
mod scoring;
mod segmentation;
mod validation;

pub use decision_engine::DecisionEngine;
pub use scoring::{credit_score, find_suitable_period, is_creditworthy};
pub use segmentation::{resolve_segment, SegmentOverrides};
pub use validation::validate;
