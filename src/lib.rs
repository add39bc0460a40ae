//! Employee Wage engine
//!
//! This crate computes employees' daily and monthly wages per company from
//! a day-by-day attendance draw, and provides an interactive menu for
//! registering companies and inspecting their results.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
