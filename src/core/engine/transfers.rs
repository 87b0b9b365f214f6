use super::matrix::ObligationMatrix;
use crate::core::models::results::Transfer;

/// Flattens a matrix into transfers, debtor rows outer and creditor columns
/// inner. Zero cells and the diagonal are skipped.
pub fn to_transfers(matrix: &ObligationMatrix) -> Vec<Transfer> {
    let n = matrix.size();
    let mut transfers = Vec::new();
    for debtor in 0..n {
        for creditor in 0..n {
            if debtor == creditor {
                continue;
            }
            let amount = matrix.get(debtor, creditor);
            if amount > 0 {
                transfers.push(Transfer::new(matrix.name(debtor), matrix.name(creditor), amount));
            }
        }
    }
    transfers
}
