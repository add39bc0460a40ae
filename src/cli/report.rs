//! Rendering of computed months for the terminal.

use std::fmt::Write as _;

use clap::ValueEnum;
use rust_decimal::Decimal;

use crate::error::{WageError, WageResult};
use crate::models::CompanyWage;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Renders one company's month.
pub fn render_company(entry: &CompanyWage, format: OutputFormat) -> WageResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(entry)),
        OutputFormat::Json => to_json(entry),
    }
}

/// Renders every company's month, in registration order.
pub fn render_all(entries: &[CompanyWage], format: OutputFormat) -> WageResult<String> {
    match format {
        OutputFormat::Text if entries.is_empty() => Ok("No companies registered.".to_string()),
        OutputFormat::Text => Ok(entries
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => to_json(entries),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> WageResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| WageError::Serialization {
        message: e.to_string(),
    })
}

fn render_text(entry: &CompanyWage) -> String {
    let params = &entry.company.parameters;
    let result = &entry.result;

    let daily = result
        .daily_wages()
        .iter()
        .map(|wage| wage.normalize().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Company: {}", entry.company.name);
    let _ = writeln!(
        out,
        "  Rate: {}/h, full day {}h, part time {}h, caps {} days / {}h",
        norm(params.wage_per_hour),
        norm(params.full_day_hours),
        norm(params.part_time_hours),
        params.max_working_days,
        norm(params.max_working_hours),
    );
    let _ = writeln!(out, "  Daily wages: [{}]", daily);
    let _ = writeln!(
        out,
        "  Total days: {} ({} present)",
        result.total_days,
        result.days_present()
    );
    let _ = writeln!(out, "  Total hours: {}", norm(result.total_hours));
    let _ = writeln!(out, "  Total wage: {}", norm(result.total_wage));
    let _ = writeln!(out, "  Stopped at: {}", result.stop_reason);
    out
}

fn norm(value: Decimal) -> Decimal {
    value.normalize()
}
