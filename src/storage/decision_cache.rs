use std::time::Duration;

use moka::future::Cache;

use crate::decision::DecisionEngine;
use crate::models::{Decision, LoanRequest};

/// Memoizes decisions per identical request.
///
/// Sound because evaluation is a pure function of the request.
pub struct DecisionCache {
    cache: Cache<LoanRequest, Decision>
}

impl DecisionCache {
    pub fn new(capacity: u64, time_to_idle: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(capacity)
                .time_to_idle(time_to_idle)
                .build()
        }
    }

    /// Returns the cached decision for `request`, evaluating and caching it on a miss.
    pub async fn get_or_evaluate(&self, engine: &DecisionEngine, request: &LoanRequest) -> Decision {
        self.cache.get_with_by_ref(request, async { engine.evaluate(request) }).await
    }

    pub async fn get(&self, request: &LoanRequest) -> Option<Decision> {
        self.cache.get(request).await
    }
}
