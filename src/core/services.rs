use crate::constants::{
    MAX_AMOUNT, MAX_NAME_LENGTH, MAX_NOTE_LENGTH, PARTICIPANT_ADDED, PARTICIPANT_REMOVED, SESSION_RESET,
    TRANSACTION_ADDED, TRANSACTION_REMOVED,
};
use crate::core::engine;
use crate::core::errors::SplitSmartError;
use crate::core::models::{
    audit::AppLog,
    participant::Participant,
    results::{NetBalance, ResultMode, ResultSet, Transfer},
    transaction::{Contribution, NewTransaction, Transaction},
};
use crate::infrastructure::cache::Cache;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use log::{debug, error, info, warn};
use serde_json::json;
use std::collections::HashSet;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Converts a client-supplied amount into whole currency units, rounding to
/// the nearest unit.
pub fn normalize_amount(field: &str, amount: f64) -> Result<u64, SplitSmartError> {
    if !amount.is_finite() {
        return Err(SplitSmartError::invalid_input(
            field,
            "Invalid Amount",
            "Amount must be a finite number",
        ));
    }
    if amount < 0.0 {
        return Err(SplitSmartError::invalid_input(
            field,
            "Invalid Amount",
            "Amount cannot be negative",
        ));
    }
    if amount > MAX_AMOUNT as f64 {
        return Err(SplitSmartError::invalid_input(
            field,
            "Amount Too Large",
            format!("Amount cannot exceed {}", MAX_AMOUNT),
        ));
    }
    Ok(amount.round() as u64)
}

pub struct SplitSmartService<L: LoggingService, S: Storage, C: Cache> {
    storage: S,
    logging: L,
    cache: C,
    // Serializes mutate-then-recompute so two writers never interleave.
    write_lock: Mutex<()>,
}

impl<L: LoggingService, S: Storage, C: Cache> SplitSmartService<L, S, C> {
    pub fn new(storage: S, logging: L, cache: C) -> Self {
        info!("Initializing SplitSmartService");
        SplitSmartService {
            storage,
            logging,
            cache,
            write_lock: Mutex::new(()),
        }
    }

    async fn log_action(&self, action: &str, details: serde_json::Value) -> Result<(), SplitSmartError> {
        debug!("{}: {}", action, details);
        self.logging.log_action(action, details).await
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), SplitSmartError> {
        if value.trim().is_empty() {
            return Err(SplitSmartError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} cannot be empty", field),
            ));
        }
        if value.chars().count() > max_length {
            return Err(SplitSmartError::invalid_input(
                field,
                format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max_length),
            ));
        }
        if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
            return Err(SplitSmartError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} contains invalid characters", field),
            ));
        }
        Ok(())
    }

    fn normalize_note(&self, note: Option<String>) -> Result<Option<String>, SplitSmartError> {
        let Some(note) = note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) else {
            return Ok(None);
        };
        if note.chars().count() > MAX_NOTE_LENGTH {
            return Err(SplitSmartError::invalid_input(
                "note",
                "note Too Long",
                format!("note cannot exceed {} characters", MAX_NOTE_LENGTH),
            ));
        }
        if note.chars().any(|c| c.is_control() && c != '\n') {
            return Err(SplitSmartError::invalid_input(
                "note",
                "Invalid note",
                "note contains invalid characters",
            ));
        }
        Ok(Some(note))
    }

    /// Rebuilds every result list from the current session and replaces the
    /// cached set. On failure the cache is emptied so no stale set survives.
    async fn recompute(&self) -> Result<ResultSet, SplitSmartError> {
        let session = self.storage.snapshot().await?;
        match engine::compute_results(&session) {
            Ok(results) => {
                self.cache.save_results(&results).await?;
                debug!(
                    "Recomputed results for {} participants and {} transactions",
                    session.participants.len(),
                    session.transactions.len()
                );
                Ok(results)
            }
            Err(err) => {
                error!("Recompute failed: {}", err);
                self.cache.invalidate_results().await?;
                Err(err)
            }
        }
    }

    // PARTICIPANTS

    pub async fn add_participant(&self, name: &str) -> Result<Participant, SplitSmartError> {
        let _guard = self.write_lock.lock().await;
        let name = name.trim();
        self.validate_string_input("name", name, MAX_NAME_LENGTH)?;

        if self.storage.get_participant(name).await?.is_some() {
            warn!("Participant {} already exists", name);
            return Err(SplitSmartError::ParticipantAlreadyExists(name.to_string()));
        }

        let participant = Participant::new(name);
        self.storage.save_participant(participant.clone()).await?;
        self.log_action(PARTICIPANT_ADDED, json!({ "name": participant.name }))
            .await?;
        self.recompute().await?;

        info!("Participant {} added", participant.name);
        Ok(participant)
    }

    pub async fn get_participant(&self, name: &str) -> Result<Participant, SplitSmartError> {
        let name = name.trim();
        self.storage
            .get_participant(name)
            .await?
            .ok_or_else(|| SplitSmartError::ParticipantNotFound(name.to_string()))
    }

    pub async fn list_participants(&self) -> Result<Vec<Participant>, SplitSmartError> {
        self.storage.list_participants().await
    }

    /// Removes a participant together with every transaction that references
    /// them as payer or beneficiary. Returns the ids of the removed
    /// transactions.
    pub async fn remove_participant(&self, name: &str) -> Result<Vec<String>, SplitSmartError> {
        let _guard = self.write_lock.lock().await;
        let name = name.trim();
        if self.storage.get_participant(name).await?.is_none() {
            warn!("Cannot remove unknown participant {}", name);
            return Err(SplitSmartError::ParticipantNotFound(name.to_string()));
        }

        let removed: Vec<String> = self
            .storage
            .list_transactions()
            .await?
            .into_iter()
            .filter(|tx| tx.references(name))
            .map(|tx| tx.id)
            .collect();
        for transaction_id in &removed {
            self.storage.delete_transaction(transaction_id).await?;
        }
        self.storage.delete_participant(name).await?;

        self.log_action(
            PARTICIPANT_REMOVED,
            json!({ "name": name, "removed_transactions": removed }),
        )
        .await?;
        self.recompute().await?;

        info!(
            "Participant {} removed along with {} transactions",
            name,
            removed.len()
        );
        Ok(removed)
    }

    // TRANSACTIONS

    pub async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction, SplitSmartError> {
        let _guard = self.write_lock.lock().await;
        let session = self.storage.snapshot().await?;

        if session.participants.is_empty() {
            return Err(SplitSmartError::NoParticipants);
        }
        if new_transaction.contributors.is_empty() {
            return Err(SplitSmartError::NoContributors);
        }
        if new_transaction.beneficiaries.is_empty() {
            return Err(SplitSmartError::NoBeneficiaries);
        }

        let mut contributors = Vec::with_capacity(new_transaction.contributors.len());
        for contribution in &new_transaction.contributors {
            let payer = contribution.payer.trim();
            if payer.is_empty() {
                return Err(SplitSmartError::invalid_input(
                    "payer",
                    "Invalid payer",
                    "Select payer",
                ));
            }
            if !session.has_participant(payer) {
                warn!("Contributor {} is missing from participants", payer);
                return Err(SplitSmartError::UnknownParticipant(payer.to_string()));
            }
            if contribution.amount > MAX_AMOUNT {
                return Err(SplitSmartError::invalid_input(
                    "amount",
                    "Amount Too Large",
                    format!("Amount cannot exceed {}", MAX_AMOUNT),
                ));
            }
            contributors.push(Contribution::new(payer, contribution.amount));
        }

        let mut seen = HashSet::new();
        let mut beneficiaries = Vec::with_capacity(new_transaction.beneficiaries.len());
        for beneficiary in &new_transaction.beneficiaries {
            let beneficiary = beneficiary.trim();
            if !session.has_participant(beneficiary) {
                warn!("Beneficiary {} is missing from participants", beneficiary);
                return Err(SplitSmartError::UnknownParticipant(beneficiary.to_string()));
            }
            if !seen.insert(beneficiary) {
                return Err(SplitSmartError::invalid_input(
                    "beneficiaries",
                    "Duplicate beneficiary",
                    format!("{} is listed more than once", beneficiary),
                ));
            }
            beneficiaries.push(beneficiary.to_string());
        }

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            contributors,
            beneficiaries,
            note: self.normalize_note(new_transaction.note)?,
            created_at: Utc::now(),
        };

        self.storage.save_transaction(transaction.clone()).await?;
        self.log_action(
            TRANSACTION_ADDED,
            json!({
                "transaction_id": transaction.id,
                "total_paid": transaction.total_paid(),
                "beneficiaries": transaction.beneficiaries,
            }),
        )
        .await?;
        self.recompute().await?;

        info!(
            "Transaction {} added: {} paid for {} beneficiaries",
            transaction.id,
            transaction.total_paid(),
            transaction.beneficiaries.len()
        );
        Ok(transaction)
    }

    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction, SplitSmartError> {
        self.storage
            .get_transaction(transaction_id)
            .await?
            .ok_or_else(|| SplitSmartError::TransactionNotFound(transaction_id.to_string()))
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, SplitSmartError> {
        self.storage.list_transactions().await
    }

    pub async fn remove_transaction(&self, transaction_id: &str) -> Result<Transaction, SplitSmartError> {
        let _guard = self.write_lock.lock().await;
        let transaction = self
            .storage
            .get_transaction(transaction_id)
            .await?
            .ok_or_else(|| SplitSmartError::TransactionNotFound(transaction_id.to_string()))?;

        self.storage.delete_transaction(transaction_id).await?;
        self.log_action(TRANSACTION_REMOVED, json!({ "transaction_id": transaction_id }))
            .await?;
        self.recompute().await?;

        info!("Transaction {} removed", transaction_id);
        Ok(transaction)
    }

    // RESULTS

    /// The most recent result set, computing it if nothing is cached yet.
    pub async fn get_results(&self) -> Result<ResultSet, SplitSmartError> {
        if let Some(results) = self.cache.get_results().await? {
            return Ok(results);
        }
        let _guard = self.write_lock.lock().await;
        self.recompute().await
    }

    pub async fn get_results_for(&self, mode: ResultMode) -> Result<Vec<Transfer>, SplitSmartError> {
        Ok(self.get_results().await?.select(mode).to_vec())
    }

    pub async fn get_net_balances(&self) -> Result<Vec<NetBalance>, SplitSmartError> {
        let session = self.storage.snapshot().await?;
        engine::compute_net_balances(&session)
    }

    // SESSION

    pub async fn reset_session(&self) -> Result<(), SplitSmartError> {
        let _guard = self.write_lock.lock().await;
        let session = self.storage.snapshot().await?;
        self.storage.clear().await?;
        self.cache.invalidate_results().await?;
        self.log_action(
            SESSION_RESET,
            json!({
                "participants": session.participants.len(),
                "transactions": session.transactions.len(),
            }),
        )
        .await?;
        self.recompute().await?;

        info!("Session reset");
        Ok(())
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SplitSmartError> {
        self.logging.get_logs().await
    }
}
