use crate::core::errors::SplitSmartError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// A single payment `from` owes `to`. Never zero, never to self.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: u64,
}

impl Transfer {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: u64) -> Self {
        Transfer {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultMode {
    /// Raw obligations, one per beneficiary share.
    Detailed,
    /// Reciprocal pairs netted against each other.
    Normal,
    /// Greedy settlement of net balances.
    Advanced,
}

impl ResultMode {
    pub const ALL: [ResultMode; 3] = [ResultMode::Detailed, ResultMode::Normal, ResultMode::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultMode::Detailed => "detailed",
            ResultMode::Normal => "normal",
            ResultMode::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for ResultMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResultMode {
    type Err = SplitSmartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(ResultMode::Detailed),
            "normal" => Ok(ResultMode::Normal),
            "advanced" => Ok(ResultMode::Advanced),
            _ => Err(SplitSmartError::UnknownResultMode(s.to_string())),
        }
    }
}

/// The three transfer lists produced by one full recompute.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ResultSet {
    pub detailed: Vec<Transfer>,
    pub normal: Vec<Transfer>,
    pub advanced: Vec<Transfer>,
    /// False only when the session has no participants or no transactions.
    pub has_data: bool,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub computed_at: DateTime<Utc>,
}

impl ResultSet {
    pub fn empty() -> Self {
        ResultSet {
            detailed: Vec::new(),
            normal: Vec::new(),
            advanced: Vec::new(),
            has_data: false,
            computed_at: Utc::now(),
        }
    }

    pub fn select(&self, mode: ResultMode) -> &[Transfer] {
        match mode {
            ResultMode::Detailed => &self.detailed,
            ResultMode::Normal => &self.normal,
            ResultMode::Advanced => &self.advanced,
        }
    }

    /// True when there is nothing to show in any mode.
    pub fn is_empty(&self) -> bool {
        self.detailed.is_empty() && self.normal.is_empty() && self.advanced.is_empty()
    }
}

/// Net position of one participant: positive is owed money, negative owes.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct NetBalance {
    pub participant: String,
    pub balance: i64,
}
