//! Solver configuration.

/// Tuning parameters for [`TimetableSolver`](super::TimetableSolver).
///
/// Penalty weights are signed to allow preference inversion (a negative
/// `gap_weight` rewards gaps instead of punishing them), but the defaults
/// treat both gaps and leisure overlaps as costs.
///
/// # Examples
///
/// ```
/// use u_timetable::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_gap_weight(2)
///     .with_conflict_weight(20)
///     .with_top_n(10);
/// assert_eq!(config.gap_weight, 2);
/// assert_eq!(config.top_n, 10);
/// assert!(config.bound_pruning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Cost per idle block enclosed by meetings on the same day.
    pub gap_weight: i32,
    /// Cost per half-hour slot a session overlaps reserved leisure time.
    pub conflict_weight: i32,
    /// Maximum number of timetables to keep (must be at least 1).
    pub top_n: usize,
    /// Whether to abandon branches that already score no better than the
    /// worst kept timetable once the shortlist is full. Disabling it makes
    /// the solver enumerate every conflict-free combination; with
    /// non-negative weights the kept results are identical either way.
    pub bound_pruning: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gap_weight: 1,
            conflict_weight: 10,
            top_n: 5,
            bound_pruning: true,
        }
    }
}

impl SolverConfig {
    /// Sets the cost per enclosed idle block.
    pub fn with_gap_weight(mut self, weight: i32) -> Self {
        self.gap_weight = weight;
        self
    }

    /// Sets the cost per slot of leisure overlap.
    pub fn with_conflict_weight(mut self, weight: i32) -> Self {
        self.conflict_weight = weight;
        self
    }

    /// Sets how many timetables to keep.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Enables or disables bound pruning.
    pub fn with_bound_pruning(mut self, enabled: bool) -> Self {
        self.bound_pruning = enabled;
        self
    }
}
