//! Line-oriented prompting with validated numeric input.

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::error::{WageError, WageResult};

/// Parses a non-negative decimal typed by the user.
pub fn parse_decimal(field: &str, input: &str) -> WageResult<Decimal> {
    let trimmed = input.trim();
    let value: Decimal = trimmed.parse().map_err(|_| WageError::InvalidInput {
        field: field.to_string(),
        message: format!("'{}' is not a number", trimmed),
    })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(WageError::InvalidInput {
            field: field.to_string(),
            message: format!("'{}' must not be negative", trimmed),
        });
    }

    Ok(value)
}

/// Parses a whole, non-negative number typed by the user.
pub fn parse_u32(field: &str, input: &str) -> WageResult<u32> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| WageError::InvalidInput {
        field: field.to_string(),
        message: format!("'{}' is not a whole number", trimmed),
    })
}

/// Reads answers from `input`, writing prompts and messages to `output`.
///
/// Every `ask_*` method returns `Ok(None)` once the input is exhausted.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of text.
    pub fn say(&mut self, text: &str) -> WageResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prints `label` and reads one trimmed line.
    pub fn ask(&mut self, label: &str) -> WageResult<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks until a non-empty line is entered.
    pub fn ask_non_empty(&mut self, label: &str) -> WageResult<Option<String>> {
        loop {
            match self.ask(label)? {
                Some(answer) if answer.is_empty() => {
                    self.say(&format!("{} must not be empty.", label))?;
                }
                other => return Ok(other),
            }
        }
    }

    /// Asks until a valid non-negative decimal is entered.
    pub fn ask_decimal(&mut self, label: &str) -> WageResult<Option<Decimal>> {
        self.ask_parsed(label, parse_decimal)
    }

    /// Asks until a valid whole number is entered.
    pub fn ask_u32(&mut self, label: &str) -> WageResult<Option<u32>> {
        self.ask_parsed(label, parse_u32)
    }

    fn ask_parsed<T>(
        &mut self,
        label: &str,
        parse: fn(&str, &str) -> WageResult<T>,
    ) -> WageResult<Option<T>> {
        loop {
            let Some(answer) = self.ask(label)? else {
                return Ok(None);
            };

            match parse(label, &answer) {
                Ok(value) => return Ok(Some(value)),
                Err(err @ WageError::InvalidInput { .. }) => {
                    self.say(&format!("{}. Please try again.", err))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Returns the output stream, consuming the prompt.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(prompt: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompt.into_output()).unwrap()
    }

    #[test]
    fn test_parse_decimal_accepts_fractions() {
        assert_eq!(
            parse_decimal("wage", " 22.75 ").unwrap(),
            Decimal::new(2275, 2)
        );
    }

    #[test]
    fn test_parse_decimal_rejects_text() {
        match parse_decimal("wage per hour", "twenty") {
            Err(WageError::InvalidInput { field, message }) => {
                assert_eq!(field, "wage per hour");
                assert!(message.contains("twenty"));
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_decimal_rejects_negative() {
        assert!(matches!(
            parse_decimal("hours", "-4"),
            Err(WageError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_parse_u32_rejects_fraction_and_negative() {
        assert!(parse_u32("days", "2.5").is_err());
        assert!(parse_u32("days", "-3").is_err());
        assert_eq!(parse_u32("days", "20").unwrap(), 20);
    }

    #[test]
    fn test_ask_decimal_reprompts_until_valid() {
        let mut p = prompt("abc\n-1\n12.5\n");

        let value = p.ask_decimal("Wage per hour").unwrap();
        assert_eq!(value, Some(Decimal::new(125, 1)));

        let output = output_of(p);
        assert_eq!(output.matches("Wage per hour: ").count(), 3);
        assert!(output.contains("Invalid value for Wage per hour: 'abc' is not a number"));
        assert!(output.contains("'-1' must not be negative"));
    }

    #[test]
    fn test_ask_u32_returns_none_on_eof() {
        let mut p = prompt("x\n");
        assert_eq!(p.ask_u32("Max working days").unwrap(), None);
    }

    #[test]
    fn test_ask_non_empty_skips_blank_lines() {
        let mut p = prompt("\n   \nAcme\n");
        assert_eq!(
            p.ask_non_empty("Company name").unwrap(),
            Some("Acme".to_string())
        );
        assert_eq!(output_of(p).matches("must not be empty").count(), 2);
    }
}
