//! Company model.
//!
//! This module defines the [`Company`] type and the [`CompanyWage`] pairing
//! of a company with its computed month.

use serde::{Deserialize, Serialize};

use super::MonthlyWageResult;
use crate::config::{CompanyConfig, WageParameters};
use crate::error::{WageError, WageResult};

/// A company and the wage parameters its employees are paid under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// The name used to look the company up.
    pub name: String,
    /// The company's wage parameters.
    pub parameters: WageParameters,
}

impl Company {
    /// Creates a company, trimming the name and validating the parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_wage::config::WageParameters;
    /// use employee_wage::models::Company;
    ///
    /// let company = Company::new("  Acme ", WageParameters::default()).unwrap();
    /// assert_eq!(company.name, "Acme");
    ///
    /// assert!(Company::new("", WageParameters::default()).is_err());
    /// ```
    pub fn new(name: impl Into<String>, parameters: WageParameters) -> WageResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(WageError::InvalidParameters {
                field: "name".to_string(),
                message: "company name must not be empty".to_string(),
            });
        }

        parameters.validate()?;

        Ok(Self { name, parameters })
    }
}

impl TryFrom<&CompanyConfig> for Company {
    type Error = WageError;

    fn try_from(config: &CompanyConfig) -> WageResult<Self> {
        Company::new(config.name.clone(), config.parameters())
    }
}

/// A company together with its computed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyWage {
    /// The company.
    pub company: Company,
    /// The month computed for it.
    pub result: MonthlyWageResult,
}
