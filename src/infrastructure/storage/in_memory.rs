use crate::core::errors::SplitSmartError;
use crate::core::models::{participant::Participant, session::Session, transaction::Transaction};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    session: Arc<RwLock<Session>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            session: Arc::new(RwLock::new(Session::new())),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_participant(&self, participant: Participant) -> Result<(), SplitSmartError> {
        let mut session = self.session.write().await;
        if session.has_participant(&participant.name) {
            return Err(SplitSmartError::ParticipantAlreadyExists(participant.name));
        }
        session.participants.push(participant);
        Ok(())
    }

    async fn get_participant(&self, name: &str) -> Result<Option<Participant>, SplitSmartError> {
        let session = self.session.read().await;
        Ok(session.participants.iter().find(|p| p.name == name).cloned())
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, SplitSmartError> {
        Ok(self.session.read().await.participants.clone())
    }

    async fn delete_participant(&self, name: &str) -> Result<(), SplitSmartError> {
        let mut session = self.session.write().await;
        let before = session.participants.len();
        session.participants.retain(|p| p.name != name);
        if session.participants.len() == before {
            return Err(SplitSmartError::ParticipantNotFound(name.to_string()));
        }
        Ok(())
    }

    async fn save_transaction(&self, transaction: Transaction) -> Result<(), SplitSmartError> {
        let mut session = self.session.write().await;
        match session.transactions.iter_mut().find(|t| t.id == transaction.id) {
            Some(existing) => *existing = transaction,
            None => session.transactions.push(transaction),
        }
        Ok(())
    }

    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>, SplitSmartError> {
        let session = self.session.read().await;
        Ok(session.transactions.iter().find(|t| t.id == transaction_id).cloned())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, SplitSmartError> {
        Ok(self.session.read().await.transactions.clone())
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<(), SplitSmartError> {
        let mut session = self.session.write().await;
        let before = session.transactions.len();
        session.transactions.retain(|t| t.id != transaction_id);
        if session.transactions.len() == before {
            return Err(SplitSmartError::TransactionNotFound(transaction_id.to_string()));
        }
        Ok(())
    }

    async fn snapshot(&self) -> Result<Session, SplitSmartError> {
        Ok(self.session.read().await.clone())
    }

    async fn clear(&self) -> Result<(), SplitSmartError> {
        *self.session.write().await = Session::new();
        Ok(())
    }
}
