//! Core data models for the Employee Wage engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod company;
mod wage_result;

pub use attendance::AttendanceStatus;
pub use company::{Company, CompanyWage};
pub use wage_result::{DailyWage, MonthlyWageResult, StopReason};
