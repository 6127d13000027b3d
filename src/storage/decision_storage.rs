use crate::models::EvaluatedApplication;
use crate::storage::Storage;
use crate::types::ApplicationId;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::warn;

pub struct DecisionStorage {
    results: Arc<DashMap<ApplicationId, EvaluatedApplication>>
}

impl DecisionStorage {
    pub fn new() -> Self {
        Self {
            results: Arc::new(DashMap::new())
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Snapshot of every stored result, ordered by application id.
    pub fn sorted(&self) -> Vec<EvaluatedApplication> {
        let mut evaluated: Vec<_> = self.results.iter().map(|entry| entry.value().clone()).collect();
        evaluated.sort_by_key(|item| item.application_id);
        evaluated
    }
}

impl Storage for DecisionStorage {
    fn load(&self, application_id: ApplicationId) -> Option<EvaluatedApplication> {
        self.results.get(&application_id).map(|entry| entry.value().clone())
    }

    fn save(&self, evaluated: EvaluatedApplication) {
        let application_id = evaluated.application_id;

        if self.results.insert(application_id, evaluated).is_some() {
            warn!("Duplicate application [{application_id}], keeping the latest decision");
        }
    }
}
