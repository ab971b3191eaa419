//! Course catalog models.
//!
//! A [`Course`] is a named group of alternative [`Session`]s and the solver
//! picks exactly one session per course. Sessions mirror rows of a course
//! database: a numeric id, a display name, and the weekly meeting times as
//! a [`WeekGrid`].

use serde::{Deserialize, Serialize};

use super::WeekGrid;

/// One offered section of a course: a selectable alternative with fixed
/// weekly meeting times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Catalog identifier, unique within its course.
    pub id: i64,
    /// Display name, e.g. `"Linear Algebra (Kim)"`.
    pub name: String,
    /// Weekly meeting times.
    pub times: WeekGrid,
}

impl Session {
    /// Creates a session with the given id, name, and meeting times.
    pub fn new(id: i64, name: impl Into<String>, times: WeekGrid) -> Self {
        Self {
            id,
            name: name.into(),
            times,
        }
    }
}

/// A course offering one or more alternative sessions.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, Session, WeekGrid};
///
/// let course = Course::new("Calculus I")
///     .with_session(Session::new(101, "Section A", WeekGrid::new().with_span(0, 2, 3)))
///     .with_session(Session::new(102, "Section B", WeekGrid::new().with_span(2, 2, 3)));
/// assert_eq!(course.sessions.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Display name of the course.
    pub name: String,
    /// Alternative sessions, in catalog order.
    pub sessions: Vec<Session>,
}

impl Course {
    /// Creates a course with no sessions yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sessions: Vec::new(),
        }
    }

    /// Adds an alternative session (builder form).
    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }
}
