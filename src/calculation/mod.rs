//! Calculation logic for the Employee Wage engine.
//!
//! This module contains the attendance sources that feed the simulation,
//! the pure daily wage function, and the monthly accumulation loop that
//! sums daily wages until a working-day or working-hour cap is reached.

mod attendance;
mod daily_wage;
mod monthly_wage;

pub use attendance::{AttendanceSource, RandomAttendance, ScriptedAttendance, next_attendance};
pub use daily_wage::daily_wage;
pub use monthly_wage::monthly_wage;
