//! Attendance sources.
//!
//! The accumulation loop never calls a random number generator directly.
//! It pulls each day's status from an [`AttendanceSource`], so tests and
//! callers can replay a fixed sequence or seed the draws.

use std::vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::AttendanceStatus;

/// Produces one attendance status per simulated day.
pub trait AttendanceSource {
    /// Draws the status for the next day.
    fn next_attendance(&mut self) -> AttendanceStatus;
}

impl<F> AttendanceSource for F
where
    F: FnMut() -> AttendanceStatus,
{
    fn next_attendance(&mut self) -> AttendanceStatus {
        self()
    }
}

/// Draws a status uniformly over [`AttendanceStatus::ALL`].
///
/// # Examples
///
/// ```
/// use employee_wage::calculation::{AttendanceSource, RandomAttendance};
///
/// let mut first = RandomAttendance::seeded(7);
/// let mut second = RandomAttendance::seeded(7);
/// for _ in 0..10 {
///     assert_eq!(first.next_attendance(), second.next_attendance());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RandomAttendance<R = SmallRng> {
    rng: R,
}

impl RandomAttendance<SmallRng> {
    /// Creates a source whose draws are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Creates a source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }
}

impl<R: Rng> RandomAttendance<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> AttendanceSource for RandomAttendance<R> {
    fn next_attendance(&mut self) -> AttendanceStatus {
        let idx = self.rng.gen_range(0..AttendanceStatus::ALL.len());
        AttendanceStatus::ALL[idx]
    }
}

/// Replays a fixed sequence of statuses, then reports `Absent` forever.
///
/// # Examples
///
/// ```
/// use employee_wage::calculation::{AttendanceSource, ScriptedAttendance};
/// use employee_wage::models::AttendanceStatus;
///
/// let mut source = ScriptedAttendance::new(vec![AttendanceStatus::FullTime]);
/// assert_eq!(source.next_attendance(), AttendanceStatus::FullTime);
/// assert_eq!(source.next_attendance(), AttendanceStatus::Absent);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedAttendance {
    statuses: vec::IntoIter<AttendanceStatus>,
}

impl ScriptedAttendance {
    /// Creates a source that replays `statuses` in order.
    pub fn new(statuses: Vec<AttendanceStatus>) -> Self {
        Self {
            statuses: statuses.into_iter(),
        }
    }

    /// Returns how many scripted statuses have not been drawn yet.
    pub fn remaining(&self) -> usize {
        self.statuses.len()
    }
}

impl AttendanceSource for ScriptedAttendance {
    fn next_attendance(&mut self) -> AttendanceStatus {
        self.statuses.next().unwrap_or(AttendanceStatus::Absent)
    }
}

/// Draws one status uniformly at random using the thread-local generator.
pub fn next_attendance() -> AttendanceStatus {
    RandomAttendance::new(rand::thread_rng()).next_attendance()
}
