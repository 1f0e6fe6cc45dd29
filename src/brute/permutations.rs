//! Lexicographic permutation enumeration.
//!
//! The search walks every permutation of the full index sequence in place,
//! starting from the identity, so no permutation is ever allocated.
//!
//! # References
//!
//! - Knuth, *TAOCP* Vol. 4A, §7.2.1.2, Algorithm L

/// Advances `perm` to its lexicographic successor.
///
/// Returns `false` (leaving `perm` untouched) when `perm` is already the
/// last permutation, i.e. sorted descending.
///
/// ```
/// use u_tsp::brute::next_permutation;
///
/// let mut p = vec![0, 2, 1];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, vec![1, 0, 2]);
/// ```
pub fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let mut pivot = n - 1;
    while pivot > 0 && perm[pivot - 1] >= perm[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;

    let mut successor = n - 1;
    while perm[successor] <= perm[pivot] {
        successor -= 1;
    }
    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}

/// `n!`, or `None` on overflow.
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}
