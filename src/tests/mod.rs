mod config_tests;
mod participant_tests;
mod transaction_tests;

use crate::core::models::transaction::{Contribution, NewTransaction};
use crate::core::services::SplitSmartService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> SplitSmartService<InMemoryLogging, InMemoryStorage, InMemoryCache> {
    let _ = env_logger::builder().is_test(true).try_init();
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    SplitSmartService::new(storage, logging, cache)
}

pub fn expense(contributors: &[(&str, u64)], beneficiaries: &[&str]) -> NewTransaction {
    NewTransaction {
        contributors: contributors
            .iter()
            .map(|(payer, amount)| Contribution::new(*payer, *amount))
            .collect(),
        beneficiaries: beneficiaries.iter().map(|b| b.to_string()).collect(),
        note: None,
    }
}
