//! Configuration loading and management for the Employee Wage engine.
//!
//! This module provides the per-company [`WageParameters`] record and the
//! functionality to load a roster of companies from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use employee_wage::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./companies.yaml").unwrap();
//! println!("Loaded {} companies", config.companies().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyConfig, RosterConfig, WageParameters};
