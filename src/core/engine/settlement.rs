use super::matrix::ObligationMatrix;
use crate::core::errors::SplitSmartError;
use crate::core::models::results::Transfer;
use log::{debug, error};

#[derive(Debug)]
struct Position {
    index: usize,
    remaining: u64,
}

fn overflow(debtor: &str, creditor: &str) -> SplitSmartError {
    error!("Balance overflow moving {} -> {}", debtor, creditor);
    SplitSmartError::InvariantViolation(format!(
        "balance overflow between {debtor} and {creditor}"
    ))
}

/// Net position per participant, in matrix order. Every cell moves its amount
/// from the debtor's balance to the creditor's, so the total is always zero.
///
/// Fails if a cell or a running balance does not fit in an `i64`.
pub fn net_balances(matrix: &ObligationMatrix) -> Result<Vec<i64>, SplitSmartError> {
    let n = matrix.size();
    let mut balances = vec![0i64; n];
    for debtor in 0..n {
        for creditor in 0..n {
            let cell = matrix.get(debtor, creditor);
            if cell == 0 {
                continue;
            }
            let amount =
                i64::try_from(cell).map_err(|_| overflow(matrix.name(debtor), matrix.name(creditor)))?;
            balances[creditor] = balances[creditor]
                .checked_add(amount)
                .ok_or_else(|| overflow(matrix.name(debtor), matrix.name(creditor)))?;
            balances[debtor] = balances[debtor]
                .checked_sub(amount)
                .ok_or_else(|| overflow(matrix.name(debtor), matrix.name(creditor)))?;
        }
    }
    Ok(balances)
}

/// Settles net balances by repeatedly paying the largest remaining creditor
/// from the largest remaining debtor.
///
/// This is a heuristic: it usually needs few transfers but is not guaranteed
/// to find the minimum number for every distribution of balances.
pub fn settle(matrix: &ObligationMatrix) -> Result<Vec<Transfer>, SplitSmartError> {
    let balances = net_balances(matrix)?;
    let residual: i128 = balances.iter().map(|&b| i128::from(b)).sum();
    if residual != 0 {
        error!("Net balances sum to {} instead of zero: {:?}", residual, balances);
        return Err(SplitSmartError::InvariantViolation(format!(
            "net balances sum to {residual}"
        )));
    }

    let mut creditors: Vec<Position> = Vec::new();
    let mut debtors: Vec<Position> = Vec::new();
    for (index, &balance) in balances.iter().enumerate() {
        if balance > 0 {
            creditors.push(Position {
                index,
                remaining: balance.unsigned_abs(),
            });
        } else if balance < 0 {
            debtors.push(Position {
                index,
                remaining: balance.unsigned_abs(),
            });
        }
    }

    // Stable sort: equal magnitudes keep participant order.
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut settlements = Vec::new();
    let (mut ci, mut di) = (0, 0);
    while ci < creditors.len() && di < debtors.len() {
        let credit = &mut creditors[ci];
        let debt = &mut debtors[di];
        let amount = credit.remaining.min(debt.remaining);

        if amount > 0 && credit.index != debt.index {
            settlements.push(Transfer::new(matrix.name(debt.index), matrix.name(credit.index), amount));
        }

        credit.remaining -= amount;
        debt.remaining -= amount;

        if credit.remaining == 0 {
            ci += 1;
        }
        if debt.remaining == 0 {
            di += 1;
        }
    }

    debug!(
        "Settled {} creditors and {} debtors with {} transfers",
        creditors.len(),
        debtors.len(),
        settlements.len()
    );
    Ok(settlements)
}
