use crate::LcsEngine;

/// Fluent configuration for [`LcsEngine`].
///
/// ```
/// use lcs_align::LcsEngineBuilder;
///
/// let engine = LcsEngineBuilder::new(b"ACCG", b"ACGC")
///     .with_max_cells(1 << 20)
///     .build();
/// assert_eq!(engine.max_cells(), Some(1 << 20));
/// ```
pub struct LcsEngineBuilder<'a, T> {
    a: &'a [T],
    b: &'a [T],
    max_cells: Option<usize>,
}

impl<'a, T: Eq + Clone> LcsEngineBuilder<'a, T> {
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self {
            a,
            b,
            max_cells: None,
        }
    }

    /// Refuse comparisons whose tables would exceed `max_cells` cells.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    pub fn build(self) -> LcsEngine<'a, T> {
        LcsEngine::with_max_cells(self.a, self.b, self.max_cells)
    }
}
