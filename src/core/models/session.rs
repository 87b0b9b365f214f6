use super::participant::Participant;
use super::transaction::Transaction;

/// Everything a computation needs: the participants in insertion order and the
/// transactions recorded between them.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub participants: Vec<Participant>,
    pub transactions: Vec<Transaction>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn participant_names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty() || self.transactions.is_empty()
    }
}
