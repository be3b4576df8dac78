//! Length and direction tables plus the DP build pass.
//!
//! The length table holds, at cell `(i, j)`, the LCS length of the first `i`
//! symbols of A and the first `j` symbols of B. The direction table records
//! which transition produced each populated cell so that
//! [`crate::traceback::reconstruct`] can walk an optimal path backward.
//!
//! Both tables use flat row-major storage of `(m+1) × (n+1)` cells. Row 0
//! and column 0 of the length table are the empty-prefix base cases (always
//! zero); the same border of the direction table is unused and stays `None`.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// DP transition that produced a cell's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Symbols equal: diagonal move, both indices advance.
    Match,
    /// Value came from above: exclude A's `i`-th symbol.
    SkipA,
    /// Value came from the left: exclude B's `j`-th symbol.
    SkipB,
}

/// `(m+1) × (n+1)` grid of LCS prefix lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LengthTable {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Number of rows, `m + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `n + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of `A[..i]` and `B[..j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: u32) {
        self.cells[i * self.cols + j] = value;
    }

    /// LCS length of the full inputs: the `(m, n)` corner cell.
    #[inline]
    pub fn lcs_len(&self) -> u32 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// `(m+1) × (n+1)` grid of backpointers; the zero row/column is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionTable {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Direction>>,
}

impl DirectionTable {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Tag at `(i, j)`; `None` on the unused zero row/column.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<Direction> {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, dir: Direction) {
        self.cells[i * self.cols + j] = Some(dir);
    }
}

/// The two tables produced by one build pass, consumed together by traceback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub lengths: LengthTable,
    pub directions: DirectionTable,
}

/// Compute one cell from its three already-filled neighbours.
///
/// The tie-break is load-bearing for the reconstructed alignment: on equal
/// skip values, `SkipA` wins, so the traceback prefers excluding a symbol
/// from A. LCS *length* is tie-break-invariant; the alignment is not.
#[inline]
fn step<T: Eq>(lengths: &LengthTable, a: &[T], b: &[T], i: usize, j: usize) -> (u32, Direction) {
    if a[i - 1] == b[j - 1] {
        (lengths.get(i - 1, j - 1) + 1, Direction::Match)
    } else {
        let up = lengths.get(i - 1, j);
        let left = lengths.get(i, j - 1);
        if up >= left {
            (up, Direction::SkipA)
        } else {
            (left, Direction::SkipB)
        }
    }
}

/// Build both tables for `a` and `b` with a row-major sequential fill.
///
/// Any two finite slices are valid input; empty slices yield all-zero
/// lengths and an empty alignment downstream.
pub fn build_tables<T: Eq>(a: &[T], b: &[T]) -> Tables {
    let m = a.len();
    let n = b.len();
    let mut lengths = LengthTable::new(m + 1, n + 1);
    let mut directions = DirectionTable::new(m + 1, n + 1);

    for i in 1..=m {
        for j in 1..=n {
            let (value, dir) = step(&lengths, a, b, i, j);
            debug_assert!(value >= lengths.get(i - 1, j).max(lengths.get(i, j - 1)));
            debug_assert!(value as usize <= i.min(j));
            lengths.set(i, j, value);
            directions.set(i, j, dir);
        }
    }

    Tables {
        lengths,
        directions,
    }
}

/// Build both tables by anti-diagonal waves with rayon.
///
/// Every cell of a wave `d = i + j` depends only on earlier waves, so the
/// cells of one wave are independent. The per-cell rule (including the
/// tie-break) is shared with [`build_tables`], so the output is
/// bit-identical to the sequential build.
#[cfg(feature = "parallel")]
pub fn build_tables_parallel<T: Eq + Sync>(a: &[T], b: &[T]) -> Tables {
    let m = a.len();
    let n = b.len();
    let mut lengths = LengthTable::new(m + 1, n + 1);
    let mut directions = DirectionTable::new(m + 1, n + 1);

    for d in 2..=(m + n) {
        let lo = 1.max(d.saturating_sub(n));
        let hi = m.min(d - 1);
        if lo > hi {
            continue;
        }
        let wave: Vec<(usize, u32, Direction)> = (lo..=hi)
            .into_par_iter()
            .map(|i| {
                let j = d - i;
                let (value, dir) = step(&lengths, a, b, i, j);
                (i, value, dir)
            })
            .collect();
        for (i, value, dir) in wave {
            let j = d - i;
            lengths.set(i, j, value);
            directions.set(i, j, dir);
        }
    }

    Tables {
        lengths,
        directions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_all_zero() {
        let t = build_tables::<u8>(b"", b"");
        assert_eq!(t.lengths.rows(), 1);
        assert_eq!(t.lengths.cols(), 1);
        assert_eq!(t.lengths.lcs_len(), 0);

        let t = build_tables(b"ACGT", b"");
        assert_eq!(t.lengths.lcs_len(), 0);
        for i in 0..=4 {
            assert_eq!(t.lengths.get(i, 0), 0);
        }
    }

    #[test]
    fn zero_borders_and_unused_direction_border() {
        let t = build_tables(b"ACCG", b"ACGC");
        for i in 0..t.lengths.rows() {
            assert_eq!(t.lengths.get(i, 0), 0);
            assert_eq!(t.directions.get(i, 0), None);
        }
        for j in 0..t.lengths.cols() {
            assert_eq!(t.lengths.get(0, j), 0);
            assert_eq!(t.directions.get(0, j), None);
        }
    }

    #[test]
    fn corner_holds_lcs_length() {
        let t = build_tables(b"ACCG", b"ACGC");
        assert_eq!(t.lengths.lcs_len(), 3);

        let t = build_tables(b"ABCBDAB", b"BDCABA");
        assert_eq!(t.lengths.lcs_len(), 4);
    }

    #[test]
    fn match_cells_tag_match() {
        let t = build_tables(b"ACCG", b"ACGC");
        // (1,1) compares 'A' with 'A'
        assert_eq!(t.directions.get(1, 1), Some(Direction::Match));
        // (1,2) compares 'A' with 'C': up = 0 < left = 1, value came from the left
        assert_eq!(t.directions.get(1, 2), Some(Direction::SkipB));
        // (2,1) compares 'C' with 'A': up = 1 >= left = 0, skip A's symbol
        assert_eq!(t.directions.get(2, 1), Some(Direction::SkipA));
    }

    #[test]
    fn every_populated_cell_has_a_tag() {
        let a = b"GATTACA";
        let b = b"GCATGCU";
        let t = build_tables(a, b);
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                assert!(t.directions.get(i, j).is_some(), "missing tag at ({i},{j})");
            }
        }
    }
}
