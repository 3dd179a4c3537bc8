// src/display.rs
//! Number formatting for the dashboard: parameter readouts, chart axes and
//! Greek values.

use crate::analytics::bs_analytic::DAYS_PER_YEAR;
use crate::sweep::SensitivityVariable;

pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Decimal fraction as a percentage with one decimal, `0.28` -> `28.0%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Years as whole calendar days, `0.25` -> `91 days`
pub fn format_days(years: f64) -> String {
    format!("{:.0} days", years * DAYS_PER_YEAR)
}

pub fn format_greek(value: f64) -> String {
    format!("{:.4}", value)
}

/// Readout next to a parameter control
pub fn format_value(variable: SensitivityVariable, value: f64) -> String {
    match variable {
        SensitivityVariable::StockPrice | SensitivityVariable::StrikePrice => format_currency(value),
        SensitivityVariable::TimeToMaturity => format_days(value),
        SensitivityVariable::Volatility | SensitivityVariable::RiskFreeRate => format_percent(value),
    }
}

/// X-axis title of a sensitivity chart
pub fn axis_label(variable: SensitivityVariable) -> &'static str {
    match variable {
        SensitivityVariable::StockPrice => "Stock Price ($)",
        SensitivityVariable::StrikePrice => "Strike Price ($)",
        SensitivityVariable::TimeToMaturity => "Time to Maturity (Years)",
        SensitivityVariable::Volatility => "Volatility (%)",
        SensitivityVariable::RiskFreeRate => "Risk-Free Rate (%)",
    }
}

/// Compact x-axis tick
pub fn format_tick(variable: SensitivityVariable, value: f64) -> String {
    match variable {
        SensitivityVariable::Volatility | SensitivityVariable::RiskFreeRate => format_percent(value),
        SensitivityVariable::TimeToMaturity => format!("{:.0}d", value * DAYS_PER_YEAR),
        _ => format_currency(value),
    }
}
