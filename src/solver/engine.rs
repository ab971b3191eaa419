//! Branch-and-bound timetable search.
//!
//! # Algorithm
//!
//! 1. Courses are processed depth-first in catalog order; depth `d` picks a
//!    session for course `d`.
//! 2. A session overlapping the union of the sessions already chosen is
//!    skipped (feasibility).
//! 3. Choosing a session charges its own leisure overlap
//!    (`overlap slots × conflict_weight`) onto the running penalty.
//! 4. When the shortlist is full and the running penalty already ties or
//!    exceeds the worst kept total, the branch is abandoned (bound).
//! 5. At full depth the gap term (`closing busy blocks × gap_weight`) is
//!    added and the finished timetable is offered to the shortlist.
//!
//! With non-negative weights the running penalty never decreases along a
//! branch, so every completion of a branch cut in step 4 would have been
//! discarded by the shortlist anyway and the kept results match an
//! exhaustive run. A negative weight voids that guarantee; disable
//! `bound_pruning` to keep the search exhaustive in that case.
//!
//! # Complexity
//!
//! O(s^c) nodes worst case for `c` courses of `s` sessions each;
//! feasibility skips and the bound collapse most of the tree on realistic
//! catalogs. Penalty arithmetic saturates at the i64 range instead of
//! wrapping.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"
//! - Morrison et al. (2016), "Branch-and-Bound Algorithms: A Survey of
//!   Recent Advances in Searching, Branching, and Pruning"

use crate::models::{Course, Timetable, WeekGrid};
use crate::validation::{validate_request, ValidationError};

use super::config::SolverConfig;
use super::shortlist::Shortlist;

/// Input container for one solve: the course catalog plus optional
/// reserved leisure times.
#[derive(Debug, Clone)]
pub struct TimetableRequest {
    /// Courses to cover, one session each, in the given order.
    pub courses: Vec<Course>,
    /// Slots reserved for leisure. Overlapping them costs penalty but is
    /// never infeasible.
    pub leisure: WeekGrid,
}

impl TimetableRequest {
    /// Creates a request with no reserved leisure time.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            leisure: WeekGrid::new(),
        }
    }

    /// Sets the reserved leisure times.
    pub fn with_leisure(mut self, leisure: WeekGrid) -> Self {
        self.leisure = leisure;
        self
    }
}

/// Search counters filled in during a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Session candidates examined.
    pub nodes_explored: u64,
    /// Candidates skipped because they overlapped the current selection.
    pub conflict_skips: u64,
    /// Branches abandoned by the penalty bound.
    pub bound_prunes: u64,
    /// Complete timetables scored and offered to the shortlist.
    pub timetables_scored: u64,
}

/// Outcome of a solve: ranked timetables plus search counters.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Kept timetables, best first; ties keep discovery order.
    pub timetables: Vec<Timetable>,
    /// Search counters.
    pub stats: SolverStats,
}

impl SolveResult {
    /// The lowest-penalty timetable, if any was found.
    pub fn best(&self) -> Option<&Timetable> {
        self.timetables.first()
    }
}

/// Branch-and-bound timetable solver.
///
/// Picks one session per course so that no two chosen sessions overlap,
/// scores each complete selection, and keeps the `top_n` best.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, Session, WeekGrid};
/// use u_timetable::solver::{TimetableRequest, TimetableSolver};
///
/// let courses = vec![
///     Course::new("Calculus")
///         .with_session(Session::new(11, "Mon morning", WeekGrid::new().with_span(0, 2, 3))),
///     Course::new("Physics")
///         .with_session(Session::new(21, "Mon late", WeekGrid::new().with_span(0, 8, 3)))
///         .with_session(Session::new(22, "Tue morning", WeekGrid::new().with_span(1, 2, 3))),
/// ];
/// let request = TimetableRequest::new(courses);
///
/// let result = TimetableSolver::new().solve(&request).unwrap();
/// assert_eq!(result.timetables.len(), 2);
/// assert_eq!(result.best().unwrap().session_ids, vec![11, 21]);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableSolver {
    config: SolverConfig,
}

impl TimetableSolver {
    /// Creates a solver with default configuration.
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Sets the solver configuration.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches the catalog and returns up to `top_n` timetables, best
    /// first.
    ///
    /// The request is validated first; an invalid request fails fast with
    /// every detected issue and no partial results.
    pub fn solve(&self, request: &TimetableRequest) -> Result<SolveResult, Vec<ValidationError>> {
        validate_request(request, &self.config)?;

        let mut search = Search {
            courses: &request.courses,
            leisure: &request.leisure,
            config: &self.config,
            chosen: Vec::with_capacity(request.courses.len()),
            shortlist: Shortlist::new(self.config.top_n),
            stats: SolverStats::default(),
        };
        search.descend(WeekGrid::new(), 0);

        let Search {
            shortlist, stats, ..
        } = search;
        Ok(SolveResult {
            timetables: shortlist.into_sorted_vec(),
            stats,
        })
    }
}

impl Default for TimetableSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Working state of one recursive descent.
struct Search<'a> {
    courses: &'a [Course],
    leisure: &'a WeekGrid,
    config: &'a SolverConfig,
    /// Ids chosen so far; its length is the current depth.
    chosen: Vec<i64>,
    shortlist: Shortlist,
    stats: SolverStats,
}

impl Search<'_> {
    /// Explores every feasible completion of the current partial selection.
    ///
    /// `occupied` is the union of the chosen sessions' times and
    /// `accumulated` the leisure-overlap penalty charged so far.
    fn descend(&mut self, occupied: WeekGrid, accumulated: i64) {
        let depth = self.chosen.len();
        if depth == self.courses.len() {
            let gap_term = i64::from(occupied.busy_block_count())
                .saturating_mul(i64::from(self.config.gap_weight));
            let total = accumulated.saturating_add(gap_term);

            self.stats.timetables_scored += 1;
            self.shortlist.insert(Timetable {
                session_ids: self.chosen.clone(),
                penalty: total,
                times: occupied,
            });
            return;
        }

        for session in &self.courses[depth].sessions {
            self.stats.nodes_explored += 1;

            if occupied.conflicts_with(&session.times) {
                self.stats.conflict_skips += 1;
                continue;
            }

            let overlap_term = i64::from(session.times.overlap_count(self.leisure))
                .saturating_mul(i64::from(self.config.conflict_weight));
            let estimated = accumulated.saturating_add(overlap_term);

            if self.config.bound_pruning && self.shortlist.would_discard(estimated) {
                self.stats.bound_prunes += 1;
                continue;
            }

            self.chosen.push(session.id);
            self.descend(occupied.union(&session.times), estimated);
            self.chosen.pop();
        }
    }
}
