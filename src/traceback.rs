//! Backward walk over the direction table.
//!
//! Reconstruction starts at the `(m, n)` corner and proceeds toward the
//! origin, so positions are discovered in reverse index order. The aligned
//! output vectors are pre-sized with `None`, which makes the leading
//! placeholder fill (the unmatched prefix of the longer input) implicit.

use crate::tables::{Direction, Tables};

/// Result of one comparison: the LCS and both inputs with non-participating
/// positions masked.
///
/// `None` is the placeholder. It cannot collide with any input symbol, which
/// keeps the mask well-defined for arbitrary element types; a concrete
/// placeholder symbol is chosen only at render time via [`Alignment::masked_a`]
/// and [`Alignment::masked_b`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<T> {
    /// The reconstructed common subsequence.
    pub lcs: Vec<T>,
    /// A with masked positions; same length as A.
    pub aligned_a: Vec<Option<T>>,
    /// B with masked positions; same length as B.
    pub aligned_b: Vec<Option<T>>,
}

impl<T> Alignment<T> {
    /// Length of the reconstructed LCS.
    pub fn lcs_len(&self) -> usize {
        self.lcs.len()
    }

    /// Render aligned A with `placeholder` at masked positions.
    pub fn masked_a(&self, placeholder: T) -> Vec<T>
    where
        T: Clone,
    {
        render(&self.aligned_a, placeholder)
    }

    /// Render aligned B with `placeholder` at masked positions.
    pub fn masked_b(&self, placeholder: T) -> Vec<T>
    where
        T: Clone,
    {
        render(&self.aligned_b, placeholder)
    }
}

fn render<T: Clone>(aligned: &[Option<T>], placeholder: T) -> Vec<T> {
    aligned
        .iter()
        .map(|cell| cell.clone().unwrap_or_else(|| placeholder.clone()))
        .collect()
}

/// Reconstruct the LCS and both masked sequences from populated tables.
///
/// Walks while both indices remain positive: `Match` records the symbol into
/// all three outputs at its original index and advances both sides,
/// `SkipA`/`SkipB` advance one side past a masked position. A populated cell
/// with no tag is a table-construction bug and panics.
pub fn reconstruct<T: Eq + Clone>(tables: &Tables, a: &[T], b: &[T]) -> Alignment<T> {
    let m = a.len();
    let n = b.len();
    let mut aligned_a: Vec<Option<T>> = vec![None; m];
    let mut aligned_b: Vec<Option<T>> = vec![None; n];
    let mut lcs: Vec<T> = Vec::with_capacity(tables.lengths.lcs_len() as usize);

    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        let dir = tables
            .directions
            .get(i, j)
            .expect("populated direction cell has no tag");
        match dir {
            Direction::Match => {
                i -= 1;
                j -= 1;
                let sym = a[i].clone();
                debug_assert!(sym == b[j]);
                aligned_a[i] = Some(sym.clone());
                aligned_b[j] = Some(sym.clone());
                lcs.push(sym);
            }
            Direction::SkipA => i -= 1,
            Direction::SkipB => j -= 1,
        }
    }
    lcs.reverse();

    debug_assert_eq!(lcs.len(), tables.lengths.lcs_len() as usize);
    debug_assert!(aligned_a.iter().flatten().eq(lcs.iter()));
    debug_assert!(aligned_b.iter().flatten().eq(lcs.iter()));

    Alignment {
        lcs,
        aligned_a,
        aligned_b,
    }
}
