//! Company registry.
//!
//! Holds every registered company together with its computed month, in the
//! order the companies were added, and answers lookups by name.

use tracing::info;

use crate::calculation::{AttendanceSource, monthly_wage};
use crate::config::ConfigLoader;
use crate::error::{WageError, WageResult};
use crate::models::{Company, CompanyWage};

/// Registered companies and their computed months.
///
/// # Example
///
/// ```
/// use employee_wage::calculation::RandomAttendance;
/// use employee_wage::config::WageParameters;
/// use employee_wage::models::Company;
/// use employee_wage::registry::CompanyRegistry;
///
/// let mut registry = CompanyRegistry::new();
/// let mut source = RandomAttendance::seeded(1);
/// let acme = Company::new("Acme", WageParameters::default()).unwrap();
/// registry.add_company(acme, &mut source).unwrap();
///
/// assert!(registry.company_result("Acme").is_ok());
/// assert!(registry.company_result("Globex").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompanyRegistry {
    companies: Vec<CompanyWage>,
}

impl CompanyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a loaded roster, computing each company's month.
    pub fn from_roster<S>(loader: &ConfigLoader, source: &mut S) -> WageResult<Self>
    where
        S: AttendanceSource + ?Sized,
    {
        let mut registry = Self::new();
        for config in loader.companies() {
            registry.add_company(Company::try_from(config)?, source)?;
        }
        Ok(registry)
    }

    /// Registers a company and computes its month.
    ///
    /// The company's fields are public, so the name is trimmed and the
    /// parameters re-checked here the same way [`Company::new`] does.
    ///
    /// # Returns
    ///
    /// Returns the stored entry, or an error if:
    /// - The name is blank or the parameters are invalid (`InvalidParameters`)
    /// - A company with the same name is already registered (`DuplicateCompany`)
    pub fn add_company<S>(&mut self, company: Company, source: &mut S) -> WageResult<&CompanyWage>
    where
        S: AttendanceSource + ?Sized,
    {
        let company = Company::new(company.name, company.parameters)?;

        if self.find(&company.name).is_some() {
            return Err(WageError::DuplicateCompany { name: company.name });
        }

        let result = monthly_wage(&company.parameters, source)?;
        info!(
            company = %company.name,
            total_wage = %result.total_wage,
            total_days = result.total_days,
            "Registered company"
        );

        self.companies.push(CompanyWage { company, result });
        let index = self.companies.len() - 1;
        Ok(&self.companies[index])
    }

    /// Returns all entries in insertion order.
    pub fn companies(&self) -> &[CompanyWage] {
        &self.companies
    }

    /// Looks up a company's entry by name.
    ///
    /// Surrounding whitespace in `name` is ignored; the match is otherwise exact.
    ///
    /// # Returns
    ///
    /// Returns the entry, or `CompanyNotFound` if no company has that name.
    pub fn company_result(&self, name: &str) -> WageResult<&CompanyWage> {
        self.find(name).ok_or_else(|| WageError::CompanyNotFound {
            name: name.trim().to_string(),
        })
    }

    /// Returns the number of registered companies.
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    /// Returns true if no company has been registered.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    fn find(&self, name: &str) -> Option<&CompanyWage> {
        let name = name.trim();
        self.companies.iter().find(|entry| entry.company.name == name)
    }
}
