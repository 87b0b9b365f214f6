use crate::core::errors::SplitSmartError;
use crate::core::models::{participant::Participant, session::Session, transaction::Transaction};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_participant(&self, participant: Participant) -> Result<(), SplitSmartError>;
    async fn get_participant(&self, name: &str) -> Result<Option<Participant>, SplitSmartError>;
    async fn list_participants(&self) -> Result<Vec<Participant>, SplitSmartError>;
    async fn delete_participant(&self, name: &str) -> Result<(), SplitSmartError>;
    async fn save_transaction(&self, transaction: Transaction) -> Result<(), SplitSmartError>;
    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>, SplitSmartError>;
    async fn list_transactions(&self) -> Result<Vec<Transaction>, SplitSmartError>;
    async fn delete_transaction(&self, transaction_id: &str) -> Result<(), SplitSmartError>;
    /// Copy of the whole session, for one computation.
    async fn snapshot(&self) -> Result<Session, SplitSmartError>;
    async fn clear(&self) -> Result<(), SplitSmartError>;
}

pub mod in_memory;
