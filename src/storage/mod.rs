mod decision_cache;
mod decision_storage;
#[cfg(test)]
mod tests;

use crate::models::EvaluatedApplication;
use crate::types::ApplicationId;

pub use decision_cache::DecisionCache;
pub use decision_storage::DecisionStorage;

pub trait Storage: Send + Sync + 'static {
    fn load(&self, application_id: ApplicationId) -> Option<EvaluatedApplication>;
    fn save(&self, evaluated: EvaluatedApplication);
}
