//! Attendance status model.
//!
//! This module defines the [`AttendanceStatus`] enum, the day's work
//! classification that drives the wage computation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The day's work classification.
///
/// A fresh status is drawn for every simulated day; it carries no identity
/// beyond its value.
///
/// # Example
///
/// ```
/// use employee_wage::models::AttendanceStatus;
///
/// assert_eq!(AttendanceStatus::ALL.len(), 3);
/// assert_eq!(AttendanceStatus::PartTime.to_string(), "part-time");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee did not work.
    Absent,
    /// The employee worked a full day.
    FullTime,
    /// The employee worked a part-time day.
    PartTime,
}

impl AttendanceStatus {
    /// Every status, in declaration order.
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Absent,
        AttendanceStatus::FullTime,
        AttendanceStatus::PartTime,
    ];

    /// Returns true if the employee worked at all on this day.
    pub fn is_present(self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::FullTime => "full-time",
            AttendanceStatus::PartTime => "part-time",
        };
        f.write_str(label)
    }
}
