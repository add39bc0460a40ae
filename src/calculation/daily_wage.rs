//! Daily wage calculation.
//!
//! Maps a single day's attendance to the wage earned and the hours credited.

use rust_decimal::Decimal;

use crate::config::WageParameters;
use crate::error::{WageError, WageResult};
use crate::models::AttendanceStatus;

/// Computes the wage and hours for one day.
///
/// | Status     | Wage                              | Hours             |
/// |------------|-----------------------------------|-------------------|
/// | `FullTime` | `wage_per_hour * full_day_hours`  | `full_day_hours`  |
/// | `PartTime` | `wage_per_hour * part_time_hours` | `part_time_hours` |
/// | `Absent`   | `0`                               | `0`               |
///
/// # Returns
///
/// A `(wage, hours)` pair, or `CalculationError` if the wage does not fit in
/// a `Decimal`. Parameters that pass [`WageParameters::validate`] never overflow.
///
/// # Examples
///
/// ```
/// use employee_wage::calculation::daily_wage;
/// use employee_wage::config::WageParameters;
/// use employee_wage::models::AttendanceStatus;
/// use rust_decimal::Decimal;
///
/// let params = WageParameters::default();
/// let (wage, hours) = daily_wage(&params, AttendanceStatus::FullTime).unwrap();
/// assert_eq!(wage, Decimal::from(160));
/// assert_eq!(hours, Decimal::from(8));
/// ```
pub fn daily_wage(
    params: &WageParameters,
    status: AttendanceStatus,
) -> WageResult<(Decimal, Decimal)> {
    let hours = match status {
        AttendanceStatus::FullTime => params.full_day_hours,
        AttendanceStatus::PartTime => params.part_time_hours,
        AttendanceStatus::Absent => return Ok((Decimal::ZERO, Decimal::ZERO)),
    };

    let wage = params
        .wage_per_hour
        .checked_mul(hours)
        .ok_or_else(|| WageError::CalculationError {
            message: format!("{} x {} hours overflowed the daily wage", params.wage_per_hour, hours),
        })?;

    Ok((wage, hours))
}
