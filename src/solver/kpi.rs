//! Penalty decomposition for finished timetables.
//!
//! Recomputes a timetable's score from the catalog it was built against,
//! term by term, for reporting and for auditing solver output.
//!
//! # Terms
//!
//! | Term | Definition |
//! |------|-----------|
//! | Leisure overlap | Chosen slots shared with reserved leisure time |
//! | Busy blocks | Meeting runs that close within their day |
//! | Conflict cost | overlap slots × `conflict_weight` |
//! | Gap cost | busy blocks × `gap_weight` |

use crate::models::{Timetable, WeekGrid};

use super::config::SolverConfig;
use super::engine::TimetableRequest;

/// Per-term decomposition of a timetable's penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenaltyBreakdown {
    /// Slots the chosen sessions share with reserved leisure time.
    pub leisure_overlap_slots: u32,
    /// Meeting runs that close within their day.
    pub busy_blocks: u32,
    /// Leisure term: overlap slots times `conflict_weight`.
    pub conflict_cost: i64,
    /// Gap term: busy blocks times `gap_weight`.
    pub gap_cost: i64,
}

impl PenaltyBreakdown {
    /// Recomputes both penalty terms for a timetable against the request
    /// and configuration that produced it.
    ///
    /// Sessions are resolved by id within their course. Returns `None`
    /// when the timetable does not cover the catalog or names a session
    /// its course does not offer.
    pub fn calculate(
        timetable: &Timetable,
        request: &TimetableRequest,
        config: &SolverConfig,
    ) -> Option<Self> {
        if timetable.session_ids.len() != request.courses.len() {
            return None;
        }

        let mut merged = WeekGrid::new();
        let mut overlap_slots: u32 = 0;
        for (course, &id) in request.courses.iter().zip(&timetable.session_ids) {
            let session = course.sessions.iter().find(|s| s.id == id)?;
            overlap_slots += session.times.overlap_count(&request.leisure);
            merged = merged.union(&session.times);
        }

        let busy_blocks = merged.busy_block_count();
        Some(Self {
            leisure_overlap_slots: overlap_slots,
            busy_blocks,
            conflict_cost: i64::from(overlap_slots)
                .saturating_mul(i64::from(config.conflict_weight)),
            gap_cost: i64::from(busy_blocks).saturating_mul(i64::from(config.gap_weight)),
        })
    }

    /// Sum of both cost terms. Equals the solver-reported penalty for any
    /// timetable the solver produced under the same request and
    /// configuration.
    pub fn total(&self) -> i64 {
        self.conflict_cost.saturating_add(self.gap_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Session};
    use crate::solver::TimetableSolver;

    fn sample_request() -> TimetableRequest {
        TimetableRequest::new(vec![
            Course::new("Algebra")
                .with_session(Session::new(1, "A", WeekGrid::new().with_span(0, 0, 2))),
            Course::new("Physics")
                .with_session(Session::new(2, "A", WeekGrid::new().with_span(0, 4, 2)))
                .with_session(Session::new(3, "B", WeekGrid::new().with_span(1, 0, 2))),
        ])
        .with_leisure(WeekGrid::new().with_span(0, 4, 1))
    }

    #[test]
    fn test_breakdown_terms() {
        let request = sample_request();
        let config = SolverConfig::default();
        let timetable = Timetable {
            session_ids: vec![1, 2],
            penalty: 0,
            times: WeekGrid::new(),
        };

        let breakdown = PenaltyBreakdown::calculate(&timetable, &request, &config).unwrap();
        // Session 2 covers the single reserved slot; the union closes two
        // separate runs on Monday.
        assert_eq!(breakdown.leisure_overlap_slots, 1);
        assert_eq!(breakdown.busy_blocks, 2);
        assert_eq!(breakdown.conflict_cost, 10);
        assert_eq!(breakdown.gap_cost, 2);
        assert_eq!(breakdown.total(), 12);
    }

    #[test]
    fn test_breakdown_matches_solver_penalty() {
        let request = sample_request();
        let solver = TimetableSolver::new();
        let result = solver.solve(&request).unwrap();
        assert!(!result.timetables.is_empty());

        for timetable in &result.timetables {
            let breakdown =
                PenaltyBreakdown::calculate(timetable, &request, solver.config()).unwrap();
            assert_eq!(breakdown.total(), timetable.penalty);
        }
    }

    #[test]
    fn test_breakdown_rejects_mismatched_timetable() {
        let request = sample_request();
        let config = SolverConfig::default();

        // Wrong length.
        let short = Timetable {
            session_ids: vec![1],
            penalty: 0,
            times: WeekGrid::new(),
        };
        assert!(PenaltyBreakdown::calculate(&short, &request, &config).is_none());

        // Unknown session id.
        let unknown = Timetable {
            session_ids: vec![1, 99],
            penalty: 0,
            times: WeekGrid::new(),
        };
        assert!(PenaltyBreakdown::calculate(&unknown, &request, &config).is_none());
    }
}
