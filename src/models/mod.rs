//! Timetabling domain models.
//!
//! Provides the data types shared by the solver and its callers:
//!
//! - [`WeekGrid`] — fixed-size weekly occupancy bitmap, the unit of all
//!   conflict arithmetic.
//! - [`Session`] / [`Course`] — the catalog the solver selects from.
//! - [`Timetable`] — a scored, conflict-free selection.

mod course;
mod grid;
mod timetable;

pub use course::{Course, Session};
pub use grid::{GridLengthError, WeekGrid, DAY_COUNT, SLOTS_PER_DAY};
pub use timetable::Timetable;
