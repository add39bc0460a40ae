//! Error types for the Employee Wage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while configuring companies,
//! reading user input, or looking up results.

use thiserror::Error;

/// The main error type for the Employee Wage engine.
///
/// All fallible operations in the crate return this error type, so callers
/// can match on the variant and react programmatically.
///
/// # Example
///
/// ```
/// use employee_wage::error::WageError;
///
/// let error = WageError::CompanyNotFound {
///     name: "Globex".to_string(),
/// };
/// assert_eq!(error.to_string(), "Company not found: Globex");
/// ```
#[derive(Debug, Error)]
pub enum WageError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A wage parameter was out of range.
    #[error("Invalid wage parameter '{field}': {message}")]
    InvalidParameters {
        /// The parameter that was invalid.
        field: String,
        /// A description of what made the parameter invalid.
        message: String,
    },

    /// A value typed by the user could not be parsed.
    #[error("Invalid value for {field}: {message}")]
    InvalidInput {
        /// The prompt field the value was entered for.
        field: String,
        /// A description of the parse failure.
        message: String,
    },

    /// No company with the given name has been registered.
    #[error("Company not found: {name}")]
    CompanyNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A company with the given name is already registered.
    #[error("Company already exists: {name}")]
    DuplicateCompany {
        /// The duplicated name.
        name: String,
    },

    /// A wage or hour total did not fit in a decimal.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// A result could not be rendered as JSON.
    #[error("Failed to serialize result: {message}")]
    Serialization {
        /// A description of the serialization failure.
        message: String,
    },

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return WageError.
pub type WageResult<T> = Result<T, WageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = WageError::ConfigNotFound {
            path: "/missing/companies.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/companies.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = WageError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_parameters_displays_field_and_message() {
        let error = WageError::InvalidParameters {
            field: "wage_per_hour".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid wage parameter 'wage_per_hour': must not be negative"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = WageError::InvalidInput {
            field: "max working days".to_string(),
            message: "'abc' is not a whole number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for max working days: 'abc' is not a whole number"
        );
    }

    #[test]
    fn test_company_not_found_displays_name() {
        let error = WageError::CompanyNotFound {
            name: "Initech".to_string(),
        };
        assert_eq!(error.to_string(), "Company not found: Initech");
    }

    #[test]
    fn test_duplicate_company_displays_name() {
        let error = WageError::DuplicateCompany {
            name: "Acme".to_string(),
        };
        assert_eq!(error.to_string(), "Company already exists: Acme");
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = WageError::CalculationError {
            message: "daily wage overflowed".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: daily wage overflowed");
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> WageResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }

        match fails() {
            Err(WageError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<WageError>();
    }
}
