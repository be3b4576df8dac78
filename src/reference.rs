//! Exponential recursive LCS length, kept as a correctness oracle.
//!
//! This is the slow baseline: plain stateless recursion over suffix pairs,
//! O(2^n) time, no memoization. It computes *length only* and is used
//! exclusively by tests to cross-check the DP engine; it never feeds the
//! alignment output.

/// Practical input ceiling; beyond this the recursion blows up.
pub const MAX_ORACLE_LEN: usize = 20;

/// LCS length by exhaustive recursion.
///
/// Valid only for small inputs (≤ [`MAX_ORACLE_LEN`] symbols per side).
pub fn recursive_lcs_len<T: Eq>(a: &[T], b: &[T]) -> usize {
    debug_assert!(
        a.len() <= MAX_ORACLE_LEN && b.len() <= MAX_ORACLE_LEN,
        "oracle input too long: {}x{}",
        a.len(),
        b.len()
    );
    match (a.split_last(), b.split_last()) {
        (Some((last_a, rest_a)), Some((last_b, rest_b))) => {
            if last_a == last_b {
                recursive_lcs_len(rest_a, rest_b) + 1
            } else {
                recursive_lcs_len(a, rest_b).max(recursive_lcs_len(rest_a, b))
            }
        }
        _ => 0,
    }
}
