use super::matrix::ObligationMatrix;

/// Nets every reciprocal pair `(i, j)` / `(j, i)` into a single direction.
///
/// The larger side keeps the difference and the smaller side drops to zero;
/// equal sides both drop to zero. Only direct pairs are netted, so a cycle
/// through a third participant survives untouched. The input is not modified.
pub fn cancel_mutual(matrix: &ObligationMatrix) -> ObligationMatrix {
    let mut netted = matrix.clone();
    let n = netted.size();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let forward = netted.get(i, j);
            let backward = netted.get(j, i);
            if forward == 0 || backward == 0 {
                continue;
            }
            if forward >= backward {
                netted.set(i, j, forward - backward);
                netted.set(j, i, 0);
            } else {
                netted.set(j, i, backward - forward);
                netted.set(i, j, 0);
            }
        }
    }
    netted.clear_diagonal();
    netted
}
