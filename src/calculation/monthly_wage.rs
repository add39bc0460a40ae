//! Monthly wage accumulation.
//!
//! This module runs the bounded loop that draws attendance day by day and
//! sums daily wages until the working-day or working-hour cap is reached.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use super::attendance::AttendanceSource;
use super::daily_wage::daily_wage;
use crate::config::WageParameters;
use crate::error::{WageError, WageResult};
use crate::models::{DailyWage, MonthlyWageResult, StopReason};

/// Simulates one month of attendance and accumulates the wage.
///
/// The caps are checked before each day is drawn: the loop continues only
/// while `total_days < max_working_days` and `total_hours < max_working_hours`.
/// A drawn day whose hours would push the total past `max_working_hours` is
/// not recorded and ends the month. The loop therefore runs at most
/// `max_working_days` iterations and both totals finish at or under their caps.
///
/// # Returns
///
/// The month, or `InvalidParameters` if `params` fail
/// [`WageParameters::validate`]. Nothing is drawn from `source` in that case.
///
/// # Arguments
///
/// * `params` - The company's wage parameters
/// * `source` - Where each day's attendance comes from
///
/// # Examples
///
/// ```
/// use employee_wage::calculation::{monthly_wage, ScriptedAttendance};
/// use employee_wage::config::WageParameters;
/// use employee_wage::models::{AttendanceStatus, StopReason};
/// use rust_decimal::Decimal;
///
/// let mut statuses = vec![AttendanceStatus::FullTime; 12];
/// statuses.push(AttendanceStatus::PartTime);
/// let mut source = ScriptedAttendance::new(statuses);
///
/// let result = monthly_wage(&WageParameters::default(), &mut source).unwrap();
/// assert_eq!(result.total_days, 13);
/// assert_eq!(result.total_hours, Decimal::from(100));
/// assert_eq!(result.total_wage, Decimal::from(2000));
/// assert_eq!(result.stop_reason, StopReason::HourLimit);
/// ```
pub fn monthly_wage<S>(params: &WageParameters, source: &mut S) -> WageResult<MonthlyWageResult>
where
    S: AttendanceSource + ?Sized,
{
    params.validate()?;

    let mut days = Vec::new();
    let mut total_wage = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;
    let mut total_days: u32 = 0;

    let stop_reason = loop {
        if total_days >= params.max_working_days {
            break StopReason::DayLimit;
        }
        if total_hours >= params.max_working_hours {
            break StopReason::HourLimit;
        }

        let status = source.next_attendance();
        let (wage, hours) = daily_wage(params, status)?;
        let next_hours = checked_total(total_hours.checked_add(hours), "hours")?;

        if next_hours > params.max_working_hours {
            debug!(
                day = total_days + 1,
                %status,
                hours = %hours,
                total_hours = %total_hours,
                "Day would exceed the working-hour cap"
            );
            break StopReason::HourLimit;
        }

        total_days += 1;
        total_wage = checked_total(total_wage.checked_add(wage), "wage")?;
        total_hours = next_hours;
        days.push(DailyWage {
            day: total_days,
            status,
            hours,
            wage,
        });

        debug!(day = total_days, %status, wage = %wage, hours = %hours, "Recorded day");
    };

    info!(
        total_days,
        total_hours = %total_hours,
        total_wage = %total_wage,
        ?stop_reason,
        "Monthly wage computed"
    );

    Ok(MonthlyWageResult {
        calculation_id: Uuid::new_v4(),
        calculated_at: Utc::now(),
        parameters: *params,
        days,
        total_wage,
        total_days,
        total_hours,
        stop_reason,
    })
}

fn checked_total(total: Option<Decimal>, what: &str) -> WageResult<Decimal> {
    total.ok_or_else(|| WageError::CalculationError {
        message: format!("monthly {} total overflowed", what),
    })
}
