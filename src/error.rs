//! The one recoverable failure.
//!
//! All finite inputs are valid, so the algorithm itself has no error
//! taxonomy. What can fail is resources: the full-table design allocates
//! `(m+1) × (n+1)` cells, and a caller-configured or address-space limit on
//! that count is surfaced here instead of aborting mid-allocation.

/// Table would exceed the permitted cell count.
///
/// Returned before any allocation happens, so a caller can fall back (for
/// example to chunking the inputs) without losing the process.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("comparison of {m}x{n} symbols needs {needed} table cells, over the limit of {limit}")]
pub struct CapacityError {
    /// Length of input A.
    pub m: usize,
    /// Length of input B.
    pub n: usize,
    /// Cells the build would allocate, `(m+1) * (n+1)`.
    pub needed: u128,
    /// Permitted cell count.
    pub limit: u128,
}
