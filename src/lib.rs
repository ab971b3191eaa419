//! Weekly timetable optimization.
//!
//! Picks one session per course from a catalog so that chosen sessions
//! never overlap, ranks complete combinations by an additive penalty
//! (enclosed busy blocks plus overlap with reserved leisure time), and
//! returns the best `top_n`.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `WeekGrid`, `Course`, `Session`,
//!   `Timetable`
//! - **`solver`**: Branch-and-bound search — `TimetableSolver`,
//!   `SolverConfig`, `Shortlist`, `PenaltyBreakdown`
//! - **`validation`**: Input integrity checks (shortlist capacity,
//!   duplicate session ids)
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Course, Session, WeekGrid};
//! use u_timetable::solver::{SolverConfig, TimetableRequest, TimetableSolver};
//!
//! // Two courses; Friday afternoon is reserved leisure time.
//! let catalog = vec![
//!     Course::new("Calculus")
//!         .with_session(Session::new(101, "Mon 09:00", WeekGrid::new().with_span(0, 2, 3)))
//!         .with_session(Session::new(102, "Fri 14:00", WeekGrid::new().with_span(4, 12, 3))),
//!     Course::new("Physics")
//!         .with_session(Session::new(201, "Mon 10:30", WeekGrid::new().with_span(0, 5, 3))),
//! ];
//! let request = TimetableRequest::new(catalog)
//!     .with_leisure(WeekGrid::new().with_span(4, 12, 8));
//!
//! let solver = TimetableSolver::new().with_config(SolverConfig::default().with_top_n(3));
//! let result = solver.solve(&request).unwrap();
//!
//! assert_eq!(result.best().unwrap().session_ids, vec![101, 201]);
//! ```
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete
//!   Programming Problems"
//! - Burke & Petrovic (2002), "Recent Research Directions in Automated
//!   Timetabling"

pub mod models;
pub mod solver;
pub mod validation;
