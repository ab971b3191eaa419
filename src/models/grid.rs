//! Weekly occupancy grid.
//!
//! A fixed-size bit grid over the scheduling week: [`DAY_COUNT`] days
//! (Monday through Saturday), each divided into [`SLOTS_PER_DAY`] half-hour
//! slots starting at 08:00. A set bit means the slot is occupied.
//!
//! # Representation
//!
//! One `u32` word per day; bit `j` of `days[d]` is slot `j` of day `d`.
//! All operations are word-wise and allocation-free, so [`WeekGrid`] is a
//! small `Copy` value type.
//!
//! # Block counting
//!
//! [`WeekGrid::busy_block_count`] counts maximal runs of occupied slots per
//! day. A run is counted exactly when an occupied slot is followed by a free
//! slot within the same day; a run still open at the last slot of a day does
//! not count, and runs never join across days. Reported penalties depend on
//! this exact boundary rule, so it must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Days per scheduling week (Monday through Saturday).
pub const DAY_COUNT: usize = 6;

/// Half-hour slots per day (08:00 through 24:00).
pub const SLOTS_PER_DAY: u32 = 32;

/// A weekly occupancy grid: [`DAY_COUNT`] days of [`SLOTS_PER_DAY`] slots.
///
/// # Example
///
/// ```
/// use u_timetable::models::WeekGrid;
///
/// // Monday 09:00–10:30 (slots 2, 3, 4) and Tuesday 08:00–09:00.
/// let grid = WeekGrid::new().with_span(0, 2, 3).with_span(1, 0, 2);
/// assert_eq!(grid.occupied_slots(), 5);
/// assert!(grid.is_occupied(0, 3));
/// assert!(!grid.is_occupied(0, 5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekGrid {
    /// Per-day slot words; bit `j` of `days[d]` is slot `j` of day `d`.
    pub days: [u32; DAY_COUNT],
}

impl WeekGrid {
    /// Creates an empty grid (no occupied slots).
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a single slot occupied (builder form).
    ///
    /// # Panics
    /// Panics if `day >= DAY_COUNT` or `slot >= SLOTS_PER_DAY`.
    pub fn with_slot(mut self, day: usize, slot: u32) -> Self {
        self.set_slot(day, slot);
        self
    }

    /// Marks `slot_count` consecutive slots occupied starting at
    /// `first_slot` of `day` (builder form). A zero-length span is a no-op.
    ///
    /// # Panics
    /// Panics if `day >= DAY_COUNT` or the span extends past the day.
    pub fn with_span(mut self, day: usize, first_slot: u32, slot_count: u32) -> Self {
        assert!(day < DAY_COUNT, "day {day} out of range");
        assert!(
            first_slot <= SLOTS_PER_DAY && slot_count <= SLOTS_PER_DAY - first_slot,
            "span {first_slot}+{slot_count} extends past the day"
        );
        // Build the mask in u64 so a full-day span does not overflow the shift.
        let mask = (((1u64 << slot_count) - 1) << first_slot) as u32;
        self.days[day] |= mask;
        self
    }

    /// Marks a single slot occupied.
    ///
    /// # Panics
    /// Panics if `day >= DAY_COUNT` or `slot >= SLOTS_PER_DAY`.
    pub fn set_slot(&mut self, day: usize, slot: u32) {
        assert!(day < DAY_COUNT, "day {day} out of range");
        assert!(slot < SLOTS_PER_DAY, "slot {slot} out of range");
        self.days[day] |= 1 << slot;
    }

    /// Whether a slot is occupied.
    ///
    /// # Panics
    /// Panics if `day >= DAY_COUNT` or `slot >= SLOTS_PER_DAY`.
    #[inline]
    pub fn is_occupied(&self, day: usize, slot: u32) -> bool {
        assert!(day < DAY_COUNT, "day {day} out of range");
        assert!(slot < SLOTS_PER_DAY, "slot {slot} out of range");
        self.days[day] & (1 << slot) != 0
    }

    /// Whether no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|&day| day == 0)
    }

    /// Total number of occupied slots across the week.
    #[inline]
    pub fn occupied_slots(&self) -> u32 {
        self.days.iter().map(|day| day.count_ones()).sum()
    }

    /// Whether the two grids share any occupied slot. Symmetric.
    #[inline]
    pub fn conflicts_with(&self, other: &WeekGrid) -> bool {
        self.days
            .iter()
            .zip(&other.days)
            .any(|(a, b)| a & b != 0)
    }

    /// Word-wise OR of the two grids. Commutative, associative, idempotent.
    #[must_use]
    pub fn union(&self, other: &WeekGrid) -> WeekGrid {
        let mut merged = *self;
        for (word, other_word) in merged.days.iter_mut().zip(&other.days) {
            *word |= other_word;
        }
        merged
    }

    /// Number of slots occupied in both grids (popcount of the AND).
    #[inline]
    pub fn overlap_count(&self, other: &WeekGrid) -> u32 {
        self.days
            .iter()
            .zip(&other.days)
            .map(|(a, b)| (a & b).count_ones())
            .sum()
    }

    /// Number of maximal occupied runs that close within their day.
    ///
    /// A run is counted at the free slot that ends it: slot `j` counts when
    /// it is free and slot `j - 1` of the same day is occupied. A run still
    /// open at slot 31 therefore does not count, and runs are never stitched
    /// across days. A fully occupied day contributes 0.
    pub fn busy_block_count(&self) -> u32 {
        self.days
            .iter()
            // Bit j of `!day & (day << 1)` is set exactly when slot j is
            // free and slot j-1 is occupied.
            .map(|&day| (!day & (day << 1)).count_ones())
            .sum()
    }
}

impl From<[u32; DAY_COUNT]> for WeekGrid {
    fn from(days: [u32; DAY_COUNT]) -> Self {
        Self { days }
    }
}

/// Error returned when building a [`WeekGrid`] from a slice whose length is
/// not [`DAY_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLengthError {
    /// Number of day words the caller supplied.
    pub actual: usize,
}

impl fmt::Display for GridLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {DAY_COUNT} day words, got {}", self.actual)
    }
}

impl std::error::Error for GridLengthError {}

impl TryFrom<&[u32]> for WeekGrid {
    type Error = GridLengthError;

    /// Builds a grid from raw day words, the boundary form used by
    /// host-language adapters. Fails when the slice is not exactly
    /// [`DAY_COUNT`] words long.
    fn try_from(words: &[u32]) -> Result<Self, Self::Error> {
        let days: [u32; DAY_COUNT] = words.try_into().map_err(|_| GridLengthError {
            actual: words.len(),
        })?;
        Ok(Self { days })
    }
}
