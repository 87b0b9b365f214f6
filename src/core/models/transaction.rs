use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Money advanced by a single payer, in whole currency units.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Contribution {
    pub payer: String,
    pub amount: u64,
}

impl Contribution {
    pub fn new(payer: impl Into<String>, amount: u64) -> Self {
        Contribution {
            payer: payer.into(),
            amount,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub contributors: Vec<Contribution>,
    pub beneficiaries: Vec<String>,
    pub note: Option<String>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// True when `name` paid into or benefits from this transaction.
    pub fn references(&self, name: &str) -> bool {
        self.contributors.iter().any(|c| c.payer == name) || self.beneficiaries.iter().any(|b| b == name)
    }

    pub fn total_paid(&self) -> u64 {
        self.contributors.iter().map(|c| c.amount).sum()
    }
}

/// Input for a transaction that has not been saved yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewTransaction {
    pub contributors: Vec<Contribution>,
    pub beneficiaries: Vec<String>,
    pub note: Option<String>,
}
