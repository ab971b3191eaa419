//! Solver output model.

use serde::{Deserialize, Serialize};

use super::WeekGrid;

/// A complete, conflict-free selection of one session per course, scored by
/// the solver. Lower penalty is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Ids of the chosen sessions, in catalog course order.
    pub session_ids: Vec<i64>,
    /// Total penalty assigned by the solver.
    pub penalty: i64,
    /// Union of the chosen sessions' meeting times.
    pub times: WeekGrid,
}

impl Timetable {
    /// Number of courses covered by this timetable.
    #[inline]
    pub fn course_count(&self) -> usize {
        self.session_ids.len()
    }
}
