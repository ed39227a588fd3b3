/// Config for the current solver run.
/// Budgets never abort the run: states past a budget are not branched,
/// but everything already in the frontier is still goal-checked.
#[derive(Clone)]
pub struct SearchConfig {
    /// Max length of plans extended during the search;
    /// consulted by the breadth-first and hill-climbing solvers
    pub max_depth: Option<usize>,

    /// Max number of states expanded during the search
    pub max_expanded: Option<usize>,
}

impl SearchConfig {
    pub fn unlimited() -> Self {
        Self {
            max_depth: None,
            max_expanded: None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Represents builder for the search config [`SearchConfig`].
#[derive(Default)]
pub struct SearchConfigBuilder {
    max_depth: Option<usize>,
    max_expanded: Option<usize>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn max_expanded(mut self, max_expanded: usize) -> Self {
        self.max_expanded = Some(max_expanded);
        self
    }

    pub fn build(self) -> SearchConfig {
        SearchConfig {
            max_depth: self.max_depth,
            max_expanded: self.max_expanded,
        }
    }
}
