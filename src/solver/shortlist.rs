//! Bounded best-k store for scored timetables.
//!
//! Keeps at most `capacity` timetables in ascending penalty order.
//!
//! # Ordering
//!
//! Entries are sorted by penalty, and a new entry is placed after every
//! kept entry with an equal penalty, so discovery order survives among
//! ties. When an insert pushes the store over capacity the tail is
//! evicted, which among equal-worst entries is always the newest. Both
//! rules together mean the store holds exactly the `capacity` smallest
//! penalties seen, oldest-first within each tie group.

use crate::models::Timetable;

/// Bounded, penalty-ordered collection of the best timetables seen so far.
#[derive(Debug, Clone)]
pub struct Shortlist {
    /// Kept timetables, ascending by penalty.
    entries: Vec<Timetable>,
    capacity: usize,
}

impl Shortlist {
    /// Creates an empty shortlist holding at most `capacity` timetables.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "shortlist capacity must be at least 1");
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Offers a timetable. It is placed after all kept entries of equal or
    /// lower penalty; if the store then exceeds capacity the tail entry is
    /// evicted.
    pub fn insert(&mut self, timetable: Timetable) {
        let at = self
            .entries
            .partition_point(|kept| kept.penalty <= timetable.penalty);
        self.entries.insert(at, timetable);
        if self.entries.len() > self.capacity {
            self.entries.pop();
        }
    }

    /// Whether a timetable with this penalty would leave the store
    /// unchanged: the store is full and the penalty is no better than the
    /// current worst.
    pub fn would_discard(&self, penalty: i64) -> bool {
        self.is_full() && self.worst_penalty().is_some_and(|worst| penalty >= worst)
    }

    /// Whether the store holds `capacity` entries.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Penalty of the worst kept timetable, if any.
    #[inline]
    pub fn worst_penalty(&self) -> Option<i64> {
        self.entries.last().map(|t| t.penalty)
    }

    /// The lowest-penalty kept timetable, if any.
    #[inline]
    pub fn best(&self) -> Option<&Timetable> {
        self.entries.first()
    }

    /// Number of kept timetables.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no timetable has been kept yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of timetables the store will keep.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates kept timetables, best first.
    pub fn iter(&self) -> impl Iterator<Item = &Timetable> {
        self.entries.iter()
    }

    /// Consumes the store, returning kept timetables best first.
    pub fn into_sorted_vec(self) -> Vec<Timetable> {
        self.entries
    }
}
