//! Debt-settlement computation.
//!
//! A full recompute runs leaf to root:
//!
//! - [`build_matrix`] expands transactions into an [`ObligationMatrix`]
//! - [`to_transfers`] flattens a matrix into transfers (`detailed`)
//! - [`cancel_mutual`] nets reciprocal pairs (`normal`)
//! - [`settle`] greedily matches net creditors and debtors (`advanced`)
//!
//! Everything here is synchronous and pure. The matrix is rebuilt on every
//! call because participant indices shift whenever the participant set changes.

pub mod matrix;
pub mod netting;
pub mod settlement;
pub mod transfers;

pub use matrix::{ObligationMatrix, build_matrix};
pub use netting::cancel_mutual;
pub use settlement::{net_balances, settle};
pub use transfers::to_transfers;

use crate::core::errors::SplitSmartError;
use crate::core::models::results::{NetBalance, ResultSet};
use crate::core::models::session::Session;
use chrono::Utc;
use log::debug;

/// Recomputes all three result lists for `session` from scratch.
///
/// Without participants or transactions every list is empty and `has_data`
/// is false. With data, a list may still be empty (for example when every
/// debt cancels out) while `has_data` stays true.
pub fn compute_results(session: &Session) -> Result<ResultSet, SplitSmartError> {
    if session.is_empty() {
        debug!("Nothing to compute: session has no participants or no transactions");
        return Ok(ResultSet::empty());
    }

    let matrix = build_matrix(&session.participant_names(), &session.transactions);
    let detailed = to_transfers(&matrix);
    let netted = cancel_mutual(&matrix);
    let normal = to_transfers(&netted);
    let advanced = settle(&netted)?;

    debug!(
        "Computed results: {} detailed, {} normal, {} advanced",
        detailed.len(),
        normal.len(),
        advanced.len()
    );

    Ok(ResultSet {
        detailed,
        normal,
        advanced,
        has_data: true,
        computed_at: Utc::now(),
    })
}

/// Net position of every participant after mutual cancellation, in
/// participant order.
pub fn compute_net_balances(session: &Session) -> Result<Vec<NetBalance>, SplitSmartError> {
    let matrix = build_matrix(&session.participant_names(), &session.transactions);
    let netted = cancel_mutual(&matrix);
    let balances = net_balances(&netted)?;
    Ok(netted
        .participants()
        .iter()
        .zip(balances)
        .map(|(participant, balance)| NetBalance {
            participant: participant.clone(),
            balance,
        })
        .collect())
}
