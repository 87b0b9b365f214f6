use crate::core::errors::SplitSmartError;
use crate::core::models::results::ResultSet;
use crate::infrastructure::cache::Cache;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryCache {
    results: Arc<RwLock<Option<ResultSet>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            results: Arc::new(RwLock::new(None)),
        }
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_results(&self) -> Result<Option<ResultSet>, SplitSmartError> {
        Ok(self.results.read().await.clone())
    }

    async fn save_results(&self, results: &ResultSet) -> Result<(), SplitSmartError> {
        *self.results.write().await = Some(results.clone());
        Ok(())
    }

    async fn invalidate_results(&self) -> Result<(), SplitSmartError> {
        self.results.write().await.take();
        Ok(())
    }
}
