//! Monthly wage result models.
//!
//! This module contains the [`MonthlyWageResult`] type and the per-day
//! [`DailyWage`] entries produced by one run of the accumulation loop.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AttendanceStatus;
use crate::config::WageParameters;

/// One simulated day of a month.
///
/// # Example
///
/// ```
/// use employee_wage::models::{AttendanceStatus, DailyWage};
/// use rust_decimal::Decimal;
///
/// let day = DailyWage {
///     day: 1,
///     status: AttendanceStatus::FullTime,
///     hours: Decimal::from(8),
///     wage: Decimal::from(160),
/// };
/// assert_eq!(day.wage, Decimal::from(160));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWage {
    /// The 1-based day number within the month.
    pub day: u32,
    /// The attendance drawn for this day.
    pub status: AttendanceStatus,
    /// Hours credited for this day.
    pub hours: Decimal,
    /// Wage earned on this day.
    pub wage: Decimal,
}

/// Which cap ended the accumulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The working-day cap was reached.
    DayLimit,
    /// The working-hour cap was reached, or the next day would have exceeded it.
    HourLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::DayLimit => f.write_str("working-day limit"),
            StopReason::HourLimit => f.write_str("working-hour limit"),
        }
    }
}

/// The complete result of one monthly wage computation.
///
/// Invariants upheld by [`monthly_wage`](crate::calculation::monthly_wage):
/// - `total_wage` equals the sum of the daily wages
/// - `days.len()` equals `total_days`
/// - `total_days <= max_working_days` and `total_hours <= max_working_hours`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyWageResult {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The parameters the month was computed with.
    pub parameters: WageParameters,
    /// Simulated days in day order.
    pub days: Vec<DailyWage>,
    /// Sum of all daily wages.
    pub total_wage: Decimal,
    /// Number of simulated days.
    pub total_days: u32,
    /// Sum of all credited hours.
    pub total_hours: Decimal,
    /// The cap that ended the month.
    pub stop_reason: StopReason,
}

impl MonthlyWageResult {
    /// Returns the daily wages in day order.
    pub fn daily_wages(&self) -> Vec<Decimal> {
        self.days.iter().map(|d| d.wage).collect()
    }

    /// Returns the number of days with any attendance.
    pub fn days_present(&self) -> usize {
        self.days.iter().filter(|d| d.status.is_present()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> MonthlyWageResult {
        MonthlyWageResult {
            calculation_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            parameters: WageParameters::default(),
            days: vec![
                DailyWage {
                    day: 1,
                    status: AttendanceStatus::FullTime,
                    hours: dec("8"),
                    wage: dec("160"),
                },
                DailyWage {
                    day: 2,
                    status: AttendanceStatus::Absent,
                    hours: Decimal::ZERO,
                    wage: Decimal::ZERO,
                },
                DailyWage {
                    day: 3,
                    status: AttendanceStatus::PartTime,
                    hours: dec("4"),
                    wage: dec("80"),
                },
            ],
            total_wage: dec("240"),
            total_days: 3,
            total_hours: dec("12"),
            stop_reason: StopReason::DayLimit,
        }
    }

    #[test]
    fn test_daily_wages_preserve_day_order() {
        let result = sample_result();
        assert_eq!(
            result.daily_wages(),
            vec![dec("160"), Decimal::ZERO, dec("80")]
        );
    }

    #[test]
    fn test_days_present_skips_absent_days() {
        assert_eq!(sample_result().days_present(), 2);
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(json.contains("\"total_wage\":\"240\""));
        assert!(json.contains("\"total_days\":3"));
        assert!(json.contains("\"stop_reason\":\"day_limit\""));
        assert!(json.contains("\"status\":\"part_time\""));
    }

    #[test]
    fn test_result_deserialization_round_trip_keeps_days() {
        let original = sample_result();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: MonthlyWageResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
