use super::{DecisionCache, DecisionStorage, Storage};
use crate::decision::DecisionEngine;
use crate::models::{Decision, DecisionError, EvaluatedApplication, LoanApplication, LoanRequest};
use anyhow::{anyhow, Result};
use std::time::Duration;

fn evaluated(application_id: u32, decision: Decision) -> EvaluatedApplication {
    EvaluatedApplication::new(LoanApplication {
        application_id,
        identity_code: "49002010998".to_string(),
        loan_amount: 4000,
        loan_period: 12,
        age: 30
    }, decision)
}

#[test]
fn test_storage_basic_load_and_save_operations() -> Result<()> {
    let storage = DecisionStorage::new();

    assert!(storage.load(99).is_none());

    storage.save(evaluated(1, Decision::approved(4000, 12)));

    let retrieved = storage.load(1).ok_or_else(|| anyhow!("Decision not found in storage"))?;

    assert_eq!(retrieved.application_id, 1);
    assert_eq!(retrieved.decision, Decision::approved(4000, 12));

    Ok(())
}

#[test]
fn test_storage_sorted_orders_by_application_id() {
    let storage = DecisionStorage::new();
    storage.save(evaluated(3, Decision::approved(4000, 12)));
    storage.save(evaluated(1, Decision::Rejected(DecisionError::ExistingDebt)));
    storage.save(evaluated(2, Decision::approved(4000, 14)));

    let ids: Vec<_> = storage.sorted().iter().map(|item| item.application_id).collect();

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(storage.len(), 3);
}

#[test]
fn test_storage_keeps_latest_decision_for_duplicate_ids() -> Result<()> {
    let storage = DecisionStorage::new();
    storage.save(evaluated(1, Decision::approved(4000, 12)));
    storage.save(evaluated(1, Decision::Rejected(DecisionError::ExistingDebt)));

    let retrieved = storage.load(1).ok_or_else(|| anyhow!("Decision missing"))?;

    assert_eq!(retrieved.decision, Decision::Rejected(DecisionError::ExistingDebt));
    assert_eq!(storage.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_cache_stores_decision_on_first_evaluation() {
    let cache = DecisionCache::new(16, Duration::from_secs(60));
    let engine = DecisionEngine::new();
    let request = LoanRequest::new("49002010987", 4000, 12, 30);

    assert!(cache.get(&request).await.is_none());

    let decision = cache.get_or_evaluate(&engine, &request).await;

    assert_eq!(decision, Decision::approved(4000, 14));
    assert_eq!(cache.get(&request).await, Some(decision));
}

#[tokio::test]
async fn test_cache_distinguishes_requests_by_every_field() {
    let cache = DecisionCache::new(16, Duration::from_secs(60));
    let engine = DecisionEngine::new();

    let adult = LoanRequest::new("49002010998", 4000, 12, 30);
    let minor = LoanRequest::new("49002010998", 4000, 12, 17);

    assert!(cache.get_or_evaluate(&engine, &adult).await.is_approved());
    assert!(!cache.get_or_evaluate(&engine, &minor).await.is_approved());
}

#[tokio::test]
async fn test_cache_entries_expire_after_idle_timeout() {
    let cache = DecisionCache::new(16, Duration::from_millis(50));
    let engine = DecisionEngine::new();
    let request = LoanRequest::new("49002010998", 4000, 12, 30);

    cache.get_or_evaluate(&engine, &request).await;
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(cache.get(&request).await.is_none());
}
