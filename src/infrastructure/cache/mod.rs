pub mod in_memory;

use crate::core::errors::SplitSmartError;
use crate::core::models::results::ResultSet;
use async_trait::async_trait;

/// Holds the most recent result set until the next mutation replaces it.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_results(&self) -> Result<Option<ResultSet>, SplitSmartError>;
    async fn save_results(&self, results: &ResultSet) -> Result<(), SplitSmartError>;
    async fn invalidate_results(&self) -> Result<(), SplitSmartError>;
}
