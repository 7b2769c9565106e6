//! Diagonal-conflict energy of a permutation board.

/// Counts queen pairs sharing a diagonal.
///
/// `columns[row]` is the column of the queen on `row`. For a permutation,
/// rows and columns are conflict-free by construction, so this count is the
/// full attack count. Zero means the board is a solution.
///
/// Runs in O(N²).
///
/// # Examples
///
/// ```
/// use u_nqueens::energy;
///
/// assert_eq!(energy(&[1, 3, 0, 2]), 0);
/// assert_eq!(energy(&[0, 1, 2, 3]), 6);
/// ```
pub fn energy(columns: &[usize]) -> usize {
    let mut conflicts = 0;
    for i in 0..columns.len() {
        for j in (i + 1)..columns.len() {
            if j - i == columns[i].abs_diff(columns[j]) {
                conflicts += 1;
            }
        }
    }
    conflicts
}
