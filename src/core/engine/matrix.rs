use crate::core::errors::SplitSmartError;
use crate::core::models::transaction::Transaction;
use log::{debug, warn};
use std::collections::HashMap;

/// Square grid of who owes whom over one participant ordering.
///
/// Cell `(debtor, creditor)` holds the amount `debtor` owes `creditor`. The
/// diagonal is always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObligationMatrix {
    participants: Vec<String>,
    cells: Vec<Vec<u64>>,
}

impl ObligationMatrix {
    pub fn zeroed(participants: Vec<String>) -> Self {
        let n = participants.len();
        ObligationMatrix {
            participants,
            cells: vec![vec![0; n]; n],
        }
    }

    /// Builds a matrix from explicit rows. Rows must form an N×N grid over
    /// `participants`; diagonal entries are discarded.
    pub fn from_cells(participants: Vec<String>, cells: Vec<Vec<u64>>) -> Result<Self, SplitSmartError> {
        let n = participants.len();
        if cells.len() != n || cells.iter().any(|row| row.len() != n) {
            return Err(SplitSmartError::invalid_input(
                "cells",
                "Invalid Matrix",
                format!("Matrix must be {n}x{n}"),
            ));
        }
        let mut matrix = ObligationMatrix { participants, cells };
        matrix.clear_diagonal();
        Ok(matrix)
    }

    pub fn size(&self) -> usize {
        self.participants.len()
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn name(&self, index: usize) -> &str {
        &self.participants[index]
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.participants.iter().position(|p| p == name)
    }

    pub fn get(&self, debtor: usize, creditor: usize) -> u64 {
        self.cells[debtor][creditor]
    }

    pub(crate) fn set(&mut self, debtor: usize, creditor: usize, amount: u64) {
        self.cells[debtor][creditor] = amount;
    }

    /// Amount `debtor` owes `creditor`, by name. Unknown names owe nothing.
    pub fn owed(&self, debtor: &str, creditor: &str) -> u64 {
        match (self.index_of(debtor), self.index_of(creditor)) {
            (Some(d), Some(c)) => self.get(d, c),
            _ => 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().sum()
    }

    pub(crate) fn clear_diagonal(&mut self) {
        for k in 0..self.size() {
            self.cells[k][k] = 0;
        }
    }
}

/// Expands every contribution of every transaction into beneficiary → payer
/// obligations.
///
/// Each contribution is split into `ceil(amount / beneficiaries)` per head, so
/// uneven amounts are over-apportioned in the payer's favour. A payer's own
/// share is dropped. Names missing from `participants` are skipped.
pub fn build_matrix(participants: &[String], transactions: &[Transaction]) -> ObligationMatrix {
    let mut matrix = ObligationMatrix::zeroed(participants.to_vec());
    let index: HashMap<&str, usize> = participants
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    for tx in transactions {
        let share_count = tx.beneficiaries.len() as u64;
        for contribution in &tx.contributors {
            if contribution.payer.is_empty() || share_count == 0 {
                continue;
            }
            let Some(&payer) = index.get(contribution.payer.as_str()) else {
                warn!(
                    "Skipping contribution in transaction {}: unknown payer {}",
                    tx.id, contribution.payer
                );
                continue;
            };
            let per_share = contribution.amount.div_ceil(share_count);
            for beneficiary in &tx.beneficiaries {
                match index.get(beneficiary.as_str()) {
                    Some(&debtor) if debtor != payer => matrix.cells[debtor][payer] += per_share,
                    Some(_) => {}
                    None => warn!(
                        "Skipping share in transaction {}: unknown beneficiary {}",
                        tx.id, beneficiary
                    ),
                }
            }
        }
    }

    debug!(
        "Built {}x{} obligation matrix from {} transactions",
        matrix.size(),
        matrix.size(),
        transactions.len()
    );
    matrix
}
