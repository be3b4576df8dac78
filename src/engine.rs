//! The LCS engine: capacity check, table build, traceback.
//!
//! This is the crate's single entry point. A comparison is a pure function
//! of its two inputs: the tables are created fresh per call, fully populated
//! before traceback begins, and dropped with the call. Nothing here
//! suspends or blocks; once `run` starts, it computes to completion.

use crate::error::CapacityError;
use crate::tables::{self, Tables};
use crate::traceback;
pub use crate::traceback::Alignment;
use crate::utils::table_cells;

/// LCS engine over two borrowed sequences.
///
/// Typical usage:
/// ```
/// use lcs_align::LcsEngine;
///
/// let a = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";
/// let b = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
/// let alignment = LcsEngine::new(a, b).run().unwrap();
/// assert_eq!(alignment.lcs_len(), 20);
/// ```
pub struct LcsEngine<'a, T> {
    a: &'a [T],
    b: &'a [T],
    max_cells: Option<usize>,
}

impl<'a, T: Eq + Clone> LcsEngine<'a, T> {
    /// Create an engine with no capacity limit.
    ///
    /// The cell count must still fit in `usize`; see
    /// [`LcsEngineBuilder`](crate::builder::LcsEngineBuilder) for an explicit
    /// limit.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self {
            a,
            b,
            max_cells: None,
        }
    }

    pub(crate) fn with_max_cells(a: &'a [T], b: &'a [T], max_cells: Option<usize>) -> Self {
        Self { a, b, max_cells }
    }

    /// Input A.
    pub fn a(&self) -> &'a [T] {
        self.a
    }

    /// Input B.
    pub fn b(&self) -> &'a [T] {
        self.b
    }

    /// Configured cell limit, if any.
    pub fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }

    fn check_capacity(&self) -> Result<(), CapacityError> {
        let needed = table_cells(self.a.len(), self.b.len());
        let limit = match self.max_cells {
            Some(cells) => cells as u128,
            None => usize::MAX as u128,
        };
        if needed > limit {
            return Err(CapacityError {
                m: self.a.len(),
                n: self.b.len(),
                needed,
                limit,
            });
        }
        Ok(())
    }

    /// Build and return the length and direction tables.
    ///
    /// Exposed for inspection and testing; [`run`](Self::run) is the usual
    /// path.
    pub fn tables(&self) -> Result<Tables, CapacityError> {
        self.check_capacity()?;
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("build_tables", m = self.a.len(), n = self.b.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        Ok(tables::build_tables(self.a, self.b))
    }

    /// Compute the LCS and both masked sequences.
    pub fn run(&self) -> Result<Alignment<T>, CapacityError> {
        let t = self.tables()?;
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("traceback", lcs_len = t.lengths.lcs_len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        Ok(traceback::reconstruct(&t, self.a, self.b))
    }
}

#[cfg(feature = "parallel")]
impl<'a, T: Eq + Clone + Sync> LcsEngine<'a, T> {
    /// [`tables`](Self::tables) with the anti-diagonal parallel fill.
    pub fn tables_parallel(&self) -> Result<Tables, CapacityError> {
        self.check_capacity()?;
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "build_tables_parallel",
            m = self.a.len(),
            n = self.b.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        Ok(tables::build_tables_parallel(self.a, self.b))
    }

    /// [`run`](Self::run) with the anti-diagonal parallel fill.
    ///
    /// The parallel build is bit-identical to the sequential one, so the
    /// alignment is too.
    pub fn run_parallel(&self) -> Result<Alignment<T>, CapacityError> {
        let t = self.tables_parallel()?;
        Ok(traceback::reconstruct(&t, self.a, self.b))
    }
}
