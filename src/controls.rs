// src/controls.rs
//! Input controls for the five contract parameters.
//!
//! The pricing engine trusts the sign of its inputs. These bounds are what
//! keeps user input inside the region where that trust holds: spot and
//! strike never drop below 1, maturity and volatility never below 0.01.

use crate::analytics::bs_analytic::ContractParams;
use crate::error::validation::{validate_finite, validate_range};
use crate::error::PricingResult;
use crate::sweep::SensitivityVariable;

/// Slider description for one contract parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSpec {
    pub variable: SensitivityVariable,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub static CONTROLS: [ControlSpec; 5] = [
    ControlSpec {
        variable: SensitivityVariable::StockPrice,
        label: "Stock Price (S)",
        min: 1.0,
        max: 1000.0,
        step: 0.1,
    },
    ControlSpec {
        variable: SensitivityVariable::StrikePrice,
        label: "Strike Price (K)",
        min: 1.0,
        max: 1000.0,
        step: 0.1,
    },
    ControlSpec {
        variable: SensitivityVariable::TimeToMaturity,
        label: "Time to Maturity (T)",
        min: 0.01,
        max: 2.0,
        step: 0.01,
    },
    ControlSpec {
        variable: SensitivityVariable::Volatility,
        label: "Volatility (σ)",
        min: 0.01,
        max: 1.0,
        step: 0.01,
    },
    ControlSpec {
        variable: SensitivityVariable::RiskFreeRate,
        label: "Risk-Free Rate (r)",
        min: 0.0,
        max: 0.15,
        step: 0.001,
    },
];

impl ControlSpec {
    pub fn for_variable(variable: SensitivityVariable) -> &'static ControlSpec {
        match variable {
            SensitivityVariable::StockPrice => &CONTROLS[0],
            SensitivityVariable::StrikePrice => &CONTROLS[1],
            SensitivityVariable::TimeToMaturity => &CONTROLS[2],
            SensitivityVariable::Volatility => &CONTROLS[3],
            SensitivityVariable::RiskFreeRate => &CONTROLS[4],
        }
    }

    /// Snap `value` into `[min, max]`. NaN maps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Check that `value` is finite and within bounds
    pub fn validate(&self, value: f64) -> PricingResult<()> {
        let name = self.variable.name();
        validate_finite(name, value)?;
        validate_range(name, value, self.min, self.max)
    }
}

impl ContractParams {
    /// Copy with every field clamped to its control bounds
    pub fn clamped(&self) -> ContractParams {
        CONTROLS
            .iter()
            .fold(*self, |params, spec| {
                params.with(spec.variable, spec.clamp(params.get(spec.variable)))
            })
    }
}

/// Validate all five parameters against their control bounds
///
/// # Errors
///
/// `PricingError::InvalidParameters` naming the first offending field.
pub fn validate(params: &ContractParams) -> PricingResult<()> {
    for spec in &CONTROLS {
        spec.validate(params.get(spec.variable))?;
    }
    Ok(())
}
