//! Configuration types for wage computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML company roster.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{WageError, WageResult};

/// Wage parameters supplied per company.
///
/// These replace the fixed wage-per-hour and cap constants with values that
/// are passed explicitly to every calculation.
///
/// # Example
///
/// ```
/// use employee_wage::config::WageParameters;
/// use rust_decimal::Decimal;
///
/// let params = WageParameters::default();
/// assert_eq!(params.wage_per_hour, Decimal::from(20));
/// assert_eq!(params.max_working_days, 20);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageParameters {
    /// Pay for one hour of work.
    pub wage_per_hour: Decimal,
    /// Hours credited for a full-time day.
    pub full_day_hours: Decimal,
    /// Hours credited for a part-time day.
    pub part_time_hours: Decimal,
    /// Maximum number of simulated days in a month.
    pub max_working_days: u32,
    /// Maximum number of hours that may be accumulated in a month.
    pub max_working_hours: Decimal,
}

impl Default for WageParameters {
    fn default() -> Self {
        Self {
            wage_per_hour: Decimal::from(20),
            full_day_hours: Decimal::from(8),
            part_time_hours: Decimal::from(4),
            max_working_days: 20,
            max_working_hours: Decimal::from(100),
        }
    }
}

impl WageParameters {
    /// Checks that every decimal parameter is non-negative and that a month's
    /// totals fit in a `Decimal`.
    ///
    /// The largest hour total a month can reach while checking its cap is
    /// `max_working_hours` plus one longest day, and the largest wage total is
    /// `wage_per_hour` times that.
    ///
    /// # Returns
    ///
    /// Returns `InvalidParameters` naming the first offending field.
    pub fn validate(&self) -> WageResult<()> {
        let fields = [
            ("wage_per_hour", self.wage_per_hour),
            ("full_day_hours", self.full_day_hours),
            ("part_time_hours", self.part_time_hours),
            ("max_working_hours", self.max_working_hours),
        ];

        for (field, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(WageError::InvalidParameters {
                    field: field.to_string(),
                    message: format!("must not be negative (got {})", value),
                });
            }
        }

        let longest_day = self.full_day_hours.max(self.part_time_hours);
        let hour_bound = self
            .max_working_hours
            .checked_add(longest_day)
            .ok_or_else(|| WageError::InvalidParameters {
                field: "max_working_hours".to_string(),
                message: format!("{} is too large", self.max_working_hours),
            })?;

        if self.wage_per_hour.checked_mul(hour_bound).is_none() {
            return Err(WageError::InvalidParameters {
                field: "wage_per_hour".to_string(),
                message: format!(
                    "{} is too large for a month of up to {} hours",
                    self.wage_per_hour, self.max_working_hours
                ),
            });
        }

        Ok(())
    }
}

/// One company entry in the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyConfig {
    /// The company name used for lookups.
    pub name: String,
    /// Pay for one hour of work.
    pub wage_per_hour: Decimal,
    /// Hours credited for a full-time day.
    pub full_day_hours: Decimal,
    /// Hours credited for a part-time day.
    pub part_time_hours: Decimal,
    /// Maximum number of simulated days in a month.
    pub max_working_days: u32,
    /// Maximum number of hours that may be accumulated in a month.
    pub max_working_hours: Decimal,
}

impl CompanyConfig {
    /// Returns the wage parameters described by this entry.
    pub fn parameters(&self) -> WageParameters {
        WageParameters {
            wage_per_hour: self.wage_per_hour,
            full_day_hours: self.full_day_hours,
            part_time_hours: self.part_time_hours,
            max_working_days: self.max_working_days,
            max_working_hours: self.max_working_hours,
        }
    }
}

/// Roster file structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// Companies in the order they appear in the file.
    #[serde(default)]
    pub companies: Vec<CompanyConfig>,
}
