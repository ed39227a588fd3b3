use std::fmt::{Debug, Display};

////////////////////////////////////////////////////////////////////////////////

/// Represents statistics of the search,
/// which can be read after the solve is complete.
#[derive(Clone, Default)]
pub struct SearchLog {
    /// Number of states expanded (branched) during the search
    pub expanded: usize,

    /// Number of successor states generated during the search
    pub generated: usize,
}

impl SearchLog {
    pub(crate) fn new() -> Self {
        Default::default()
    }
}

impl Display for SearchLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Expanded: {}, generated: {}",
            self.expanded, self.generated
        )
    }
}

impl Debug for SearchLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
