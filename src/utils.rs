//! Assorted small helpers.

/// Cell count of the DP tables for inputs of length `m` and `n`.
///
/// Computed in `u128` so the engine's capacity check cannot itself overflow.
#[inline]
pub fn table_cells(m: usize, n: usize) -> u128 {
    (m as u128 + 1) * (n as u128 + 1)
}

/// True if `needle` can be obtained from `hay` by deleting symbols without
/// reordering.
pub fn is_subsequence<T: Eq>(needle: &[T], hay: &[T]) -> bool {
    let mut rest = hay.iter();
    needle.iter().all(|sym| rest.any(|h| h == sym))
}

#[cfg(test)]
mod tests {
    use super::{is_subsequence, table_cells};

    #[test]
    fn table_cells_counts_borders() {
        assert_eq!(table_cells(0, 0), 1);
        assert_eq!(table_cells(3, 0), 4);
        assert_eq!(table_cells(2, 4), 15);
    }

    #[test]
    fn table_cells_survives_huge_inputs() {
        let cells = table_cells(usize::MAX, usize::MAX);
        assert!(cells > usize::MAX as u128);
    }

    #[test]
    fn subsequence_basics() {
        assert!(is_subsequence(b"", b""));
        assert!(is_subsequence(b"", b"ACGT"));
        assert!(is_subsequence(b"ACT", b"ACGT"));
        assert!(is_subsequence(b"ACGT", b"ACGT"));
        assert!(!is_subsequence(b"TGCA", b"ACGT"));
        assert!(!is_subsequence(b"A", b""));
        assert!(!is_subsequence(b"AA", b"A"));
    }

    #[test]
    fn subsequence_requires_order() {
        assert!(is_subsequence(b"GA", b"GATTACA"));
        assert!(!is_subsequence(b"CG", b"GATTACA"));
    }
}
