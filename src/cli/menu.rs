//! The interactive company menu.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::prompt::Prompt;
use super::report::{OutputFormat, render_all, render_company};
use crate::calculation::AttendanceSource;
use crate::config::WageParameters;
use crate::error::{WageError, WageResult};
use crate::models::Company;
use crate::registry::CompanyRegistry;

const BANNER: &str = "Welcome to Employee Wage Program";

const MENU: &str = "\
1. Add a company
2. Display all companies
3. Display a company by name
4. Exit";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register a new company.
    AddCompany,
    /// Print every company's month.
    DisplayAll,
    /// Print one company's month.
    DisplayOne,
    /// Leave the menu.
    Exit,
}

impl MenuChoice {
    /// Parses a typed menu selection.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddCompany),
            "2" => Some(MenuChoice::DisplayAll),
            "3" => Some(MenuChoice::DisplayOne),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Drives the add/display/exit loop over a pair of streams.
pub struct Menu<R, W, S> {
    prompt: Prompt<R, W>,
    registry: CompanyRegistry,
    source: S,
    format: OutputFormat,
}

impl<R, W, S> Menu<R, W, S>
where
    R: BufRead,
    W: Write,
    S: AttendanceSource,
{
    /// Creates a menu starting from `registry`.
    pub fn new(
        input: R,
        output: W,
        registry: CompanyRegistry,
        source: S,
        format: OutputFormat,
    ) -> Self {
        Self {
            prompt: Prompt::new(input, output),
            registry,
            source,
            format,
        }
    }

    /// Runs until the user exits or the input ends.
    ///
    /// Only I/O failures are returned; bad input, unknown names and
    /// duplicate companies are reported and the menu continues.
    pub fn run(&mut self) -> WageResult<()> {
        self.prompt.say(BANNER)?;

        loop {
            self.prompt.say("")?;
            self.prompt.say(MENU)?;

            let Some(answer) = self.prompt.ask("Choose an option")? else {
                debug!("Input closed, leaving menu");
                return Ok(());
            };

            let keep_going = match MenuChoice::parse(&answer) {
                Some(MenuChoice::AddCompany) => self.add_company()?,
                Some(MenuChoice::DisplayAll) => self.display_all()?,
                Some(MenuChoice::DisplayOne) => self.display_one()?,
                Some(MenuChoice::Exit) => false,
                None => {
                    self.prompt
                        .say(&format!("Invalid choice '{}'. Enter 1-4.", answer))?;
                    true
                }
            };

            if !keep_going {
                self.prompt.say("Goodbye.")?;
                return Ok(());
            }
        }
    }

    /// Returns the registry, including companies added through the menu.
    pub fn registry(&self) -> &CompanyRegistry {
        &self.registry
    }

    /// Consumes the menu, returning the output stream.
    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    // Each action returns Ok(false) when the input ended mid-action.

    fn add_company(&mut self) -> WageResult<bool> {
        let Some((name, parameters)) = self.read_company()? else {
            return Ok(false);
        };

        let company = Company { name, parameters };

        match self.registry.add_company(company, &mut self.source) {
            Ok(entry) => {
                let text = render_company(entry, self.format)?;
                let message = format!("Company '{}' added.", entry.company.name);
                self.prompt.say(&message)?;
                self.prompt.say(&text)?;
            }
            Err(
                err @ (WageError::DuplicateCompany { .. }
                | WageError::InvalidParameters { .. }
                | WageError::CalculationError { .. }),
            ) => {
                warn!(error = %err, "Company rejected");
                self.prompt.say(&err.to_string())?;
            }
            Err(err) => return Err(err),
        }

        Ok(true)
    }

    fn read_company(&mut self) -> WageResult<Option<(String, WageParameters)>> {
        let Some(name) = self.prompt.ask_non_empty("Company name")? else {
            return Ok(None);
        };
        let Some(wage_per_hour) = self.prompt.ask_decimal("Wage per hour")? else {
            return Ok(None);
        };
        let Some(full_day_hours) = self.prompt.ask_decimal("Full day hours")? else {
            return Ok(None);
        };
        let Some(part_time_hours) = self.prompt.ask_decimal("Part time hours")? else {
            return Ok(None);
        };
        let Some(max_working_days) = self.prompt.ask_u32("Max working days")? else {
            return Ok(None);
        };
        let Some(max_working_hours) = self.prompt.ask_decimal("Max working hours")? else {
            return Ok(None);
        };

        Ok(Some((
            name,
            WageParameters {
                wage_per_hour,
                full_day_hours,
                part_time_hours,
                max_working_days,
                max_working_hours,
            },
        )))
    }

    fn display_all(&mut self) -> WageResult<bool> {
        let text = render_all(self.registry.companies(), self.format)?;
        self.prompt.say(&text)?;
        Ok(true)
    }

    fn display_one(&mut self) -> WageResult<bool> {
        let Some(name) = self.prompt.ask_non_empty("Company name")? else {
            return Ok(false);
        };

        match self.registry.company_result(&name) {
            Ok(entry) => {
                let text = render_company(entry, self.format)?;
                self.prompt.say(&text)?;
            }
            Err(err @ WageError::CompanyNotFound { .. }) => {
                self.prompt.say(&err.to_string())?;
            }
            Err(err) => return Err(err),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use rust_decimal::Decimal;
    use std::io::Cursor;

    type TestMenu = Menu<Cursor<Vec<u8>>, Vec<u8>, fn() -> AttendanceStatus>;

    fn always_full_time() -> AttendanceStatus {
        AttendanceStatus::FullTime
    }

    fn menu(input: &str, format: OutputFormat) -> TestMenu {
        Menu::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            CompanyRegistry::new(),
            always_full_time as fn() -> AttendanceStatus,
            format,
        )
    }

    fn run(input: &str) -> (CompanyRegistry, String) {
        let mut menu = menu(input, OutputFormat::Text);
        menu.run().unwrap();
        let registry = menu.registry().clone();
        let output = String::from_utf8(menu.into_output()).unwrap();
        (registry, output)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::AddCompany));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_add_company_then_exit() {
        let (registry, output) = run("1\nAcme\n20\n8\n4\n20\n100\n4\n");

        assert!(output.starts_with("Welcome to Employee Wage Program"));
        assert!(output.contains("Company 'Acme' added."));
        assert!(output.contains("Goodbye."));

        let entry = registry.company_result("Acme").unwrap();
        assert_eq!(entry.result.total_days, 12);
        assert_eq!(entry.result.total_wage, Decimal::from(1920));
    }

    #[test]
    fn test_malformed_number_is_reprompted() {
        let (registry, output) = run("1\nAcme\ntwenty\n20\n8\n4\n20\n100\n4\n");

        assert!(output.contains("Invalid value for Wage per hour: 'twenty' is not a number"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_oversized_wage_is_reported_not_fatal() {
        let (registry, output) =
            run("1\nAcme\n79228162514264337593543950335\n8\n4\n20\n100\n2\n4\n");

        assert!(output.contains("Invalid wage parameter 'wage_per_hour'"));
        assert!(output.contains("too large"));
        assert!(output.contains("No companies registered."));
        assert!(output.contains("Goodbye."));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_display_unknown_company_reports_not_found() {
        let (_, output) = run("3\nGlobex\n4\n");
        assert!(output.contains("Company not found: Globex"));
    }

    #[test]
    fn test_display_one_prints_result() {
        let (_, output) = run("1\nAcme\n10\n8\n4\n2\n100\n3\nAcme\n4\n");

        // Once after adding, once when displayed by name.
        assert_eq!(output.matches("Company: Acme").count(), 2);
        assert!(output.contains("Daily wages: [80, 80]"));
    }

    #[test]
    fn test_display_all_with_no_companies() {
        let (_, output) = run("2\n4\n");
        assert!(output.contains("No companies registered."));
    }

    #[test]
    fn test_duplicate_company_is_reported() {
        let (registry, output) = run("1\nAcme\n20\n8\n4\n1\n100\n1\nAcme\n25\n8\n4\n1\n100\n4\n");

        assert!(output.contains("Company already exists: Acme"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_choice_is_reported() {
        let (_, output) = run("9\n4\n");
        assert!(output.contains("Invalid choice '9'. Enter 1-4."));
    }

    #[test]
    fn test_eof_mid_add_leaves_menu_quietly() {
        let (registry, output) = run("1\nAcme\n20\n");

        assert!(registry.is_empty());
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_eof_at_menu_exits() {
        let (_, output) = run("");
        assert!(!output.contains("Goodbye."));
    }

    #[test]
    fn test_json_format_display_all() {
        let mut menu = menu("1\nAcme\n20\n8\n4\n1\n100\n2\n4\n", OutputFormat::Json);
        menu.run().unwrap();
        let output = String::from_utf8(menu.into_output()).unwrap();

        assert!(output.contains("\"name\": \"Acme\""));
        assert!(output.contains("\"total_wage\": \"160\""));
    }
}
