//! Branch-and-bound timetable selection.
//!
//! Picks one session per course so that chosen sessions never overlap,
//! scores every complete selection, and keeps the best `top_n`.
//!
//! # Algorithm
//!
//! `TimetableSolver` runs a depth-first branch and bound over the courses
//! in catalog order: infeasible sessions are skipped, leisure overlap is
//! charged as the path descends, and a full [`Shortlist`] bounds the
//! search.
//!
//! # Scoring
//!
//! `penalty = leisure overlap slots × conflict_weight
//!          + closing busy blocks × gap_weight`
//!
//! [`PenaltyBreakdown`] recomputes both terms for any finished timetable.
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"
//! - Morrison et al. (2016), "Branch-and-Bound Algorithms: A Survey of
//!   Recent Advances in Searching, Branching, and Pruning"

mod config;
mod engine;
mod kpi;
mod shortlist;

pub use config::SolverConfig;
pub use engine::{SolveResult, SolverStats, TimetableRequest, TimetableSolver};
pub use kpi::PenaltyBreakdown;
pub use shortlist::Shortlist;
