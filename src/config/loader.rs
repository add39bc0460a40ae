//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a company
//! roster from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{WageError, WageResult};

use super::types::{CompanyConfig, RosterConfig};

/// Loads and provides access to a company roster.
///
/// The roster is a single YAML file listing companies and their wage
/// parameters:
///
/// ```text
/// companies:
///   - name: Acme
///     wage_per_hour: 20
///     full_day_hours: 8
///     part_time_hours: 4
///     max_working_days: 20
///     max_working_hours: 100
/// ```
///
/// Every entry is validated when loaded, so a `ConfigLoader` never holds
/// out-of-range parameters or blank company names.
///
/// # Example
///
/// ```no_run
/// use employee_wage::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./companies.yaml")?;
/// for company in loader.companies() {
///     println!("{}: {}/h", company.name, company.wage_per_hour);
/// }
/// # Ok::<(), employee_wage::error::WageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    roster: RosterConfig,
}

impl ConfigLoader {
    /// Loads the roster from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - An entry has a blank name or out-of-range parameter (`InvalidParameters`,
    ///   with the company and file named in the message)
    pub fn load<P: AsRef<Path>>(path: P) -> WageResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| WageError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses a roster from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> WageResult<Self> {
        let roster: RosterConfig =
            serde_yaml::from_str(content).map_err(|e| WageError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        for (index, company) in roster.companies.iter().enumerate() {
            if company.name.trim().is_empty() {
                return Err(WageError::InvalidParameters {
                    field: "name".to_string(),
                    message: format!("company #{} in {} has an empty name", index + 1, source),
                });
            }

            company.parameters().validate().map_err(|e| match e {
                WageError::InvalidParameters { field, message } => WageError::InvalidParameters {
                    field,
                    message: format!("company '{}' in {}: {}", company.name, source, message),
                },
                other => other,
            })?;
        }

        debug!(source, companies = roster.companies.len(), "Loaded company roster");

        Ok(Self { roster })
    }

    /// Returns the roster entries in file order.
    pub fn companies(&self) -> &[CompanyConfig] {
        &self.roster.companies
    }
}
