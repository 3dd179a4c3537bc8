// src/sweep.rs
//! Single-variable sensitivity sweeps
//!
//! A sweep holds four contract parameters fixed, walks the fifth across a
//! fixed range and revalues the option at every point:
//!
//! | variable           | range                    |
//! |--------------------|--------------------------|
//! | `StockPrice`       | [0.8 × base, 1.2 × base] |
//! | `StrikePrice`      | [0.8 × base, 1.2 × base] |
//! | `TimeToMaturity`   | [0.01, 1.0]              |
//! | `Volatility`       | [0.05, 0.6]              |
//! | `RiskFreeRate`     | [0.01, 0.1]              |
//!
//! `sample_count` is the number of intervals, so a sweep yields
//! `sample_count + 1` points with both endpoints included. Each call builds
//! a fresh curve; nothing is updated in place.

use crate::analytics::bs_analytic::{valuate, ContractParams, Valuation};
use crate::analytics::greeks::GreekSet;
use crate::error::{validation::validate_sample_count, PricingError, PricingResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of sweep intervals (51 points)
pub const DEFAULT_SAMPLE_COUNT: usize = 50;

/// The contract parameter being varied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityVariable {
    StockPrice,
    StrikePrice,
    TimeToMaturity,
    Volatility,
    RiskFreeRate,
}

impl SensitivityVariable {
    pub const ALL: [SensitivityVariable; 5] = [
        SensitivityVariable::StockPrice,
        SensitivityVariable::StrikePrice,
        SensitivityVariable::TimeToMaturity,
        SensitivityVariable::Volatility,
        SensitivityVariable::RiskFreeRate,
    ];

    /// snake_case identifier, also used as the CSV column header
    pub fn name(&self) -> &'static str {
        match self {
            SensitivityVariable::StockPrice => "stock_price",
            SensitivityVariable::StrikePrice => "strike_price",
            SensitivityVariable::TimeToMaturity => "time_to_maturity",
            SensitivityVariable::Volatility => "volatility",
            SensitivityVariable::RiskFreeRate => "risk_free_rate",
        }
    }
}

impl fmt::Display for SensitivityVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SensitivityVariable {
    type Err = PricingError;

    /// Accepts snake_case, camelCase and the short forms `stock`, `strike`,
    /// `time`/`maturity`/`t`, `vol`/`sigma`, `rate`/`r`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "stockprice" | "stock" | "spot" | "s" => Ok(SensitivityVariable::StockPrice),
            "strikeprice" | "strike" | "k" => Ok(SensitivityVariable::StrikePrice),
            "timetomaturity" | "maturity" | "time" | "t" => Ok(SensitivityVariable::TimeToMaturity),
            "volatility" | "vol" | "sigma" => Ok(SensitivityVariable::Volatility),
            "riskfreerate" | "rate" | "r" => Ok(SensitivityVariable::RiskFreeRate),
            _ => Err(PricingError::UnknownVariable(s.to_string())),
        }
    }
}

/// Closed interval scanned by a sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub min: f64,
    pub max: f64,
}

impl SweepRange {
    /// Scan range for `variable`
    ///
    /// Spot and strike scan ±20% around their value in `base`; the other
    /// three use absolute bounds regardless of `base`.
    pub fn for_variable(variable: SensitivityVariable, base: &ContractParams) -> Self {
        match variable {
            SensitivityVariable::StockPrice | SensitivityVariable::StrikePrice => {
                let value = base.get(variable);
                SweepRange {
                    min: 0.8 * value,
                    max: 1.2 * value,
                }
            }
            SensitivityVariable::TimeToMaturity => SweepRange { min: 0.01, max: 1.0 },
            SensitivityVariable::Volatility => SweepRange { min: 0.05, max: 0.6 },
            SensitivityVariable::RiskFreeRate => SweepRange { min: 0.01, max: 0.1 },
        }
    }

    /// The `i`-th of `n` evenly spaced intervals; `i == n` is exactly `max`
    pub fn point(&self, i: usize, n: usize) -> f64 {
        if i >= n {
            self.max
        } else {
            self.min + (i as f64) * (self.max - self.min) / (n as f64)
        }
    }
}

/// One point of a sensitivity curve: both prices and the call-side Greeks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    /// Value of the swept variable
    pub value: f64,
    pub call_price: f64,
    pub put_price: f64,
    pub call_delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub call_theta: f64,
    pub call_rho: f64,
}

impl SweepSample {
    pub fn from_valuation(value: f64, valuation: &Valuation) -> Self {
        let Valuation { prices, greeks, .. } = valuation;
        SweepSample {
            value,
            call_price: prices.call_price,
            put_price: prices.put_price,
            call_delta: greeks.call_delta,
            gamma: greeks.gamma,
            vega: greeks.vega,
            call_theta: greeks.call_theta,
            call_rho: greeks.call_rho,
        }
    }

    /// Value of a chart Greek; `None` for put-side or combined flags
    pub fn greek(&self, flag: GreekSet) -> Option<f64> {
        let value = match flag {
            f if f == GreekSet::CALL_DELTA => self.call_delta,
            f if f == GreekSet::GAMMA => self.gamma,
            f if f == GreekSet::VEGA => self.vega,
            f if f == GreekSet::CALL_THETA => self.call_theta,
            f if f == GreekSet::CALL_RHO => self.call_rho,
            _ => return None,
        };
        Some(value)
    }
}

/// Ordered samples for one swept variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepCurve<S = SweepSample> {
    pub variable: SensitivityVariable,
    pub range: SweepRange,
    pub samples: Vec<S>,
}

impl<S> SweepCurve<S> {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.samples.iter()
    }
}

impl<'a, S> IntoIterator for &'a SweepCurve<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Sweep settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Number of intervals; the curve has `sample_count + 1` points
    pub sample_count: usize,
    /// Spread valuations over the rayon pool. Output order is unaffected.
    pub parallel: bool,
}

impl SweepConfig {
    /// Validate the sweep configuration
    pub fn validate(&self) -> PricingResult<()> {
        validate_sample_count(self.sample_count)
    }

    /// Sweep `variable` with the curated [`SweepSample`] projection
    pub fn run(
        &self,
        params: &ContractParams,
        variable: SensitivityVariable,
    ) -> PricingResult<SweepCurve> {
        self.run_with(params, variable, SweepSample::from_valuation)
    }

    /// Sweep `variable`, mapping every valuation through `project`
    pub fn run_with<S, F>(
        &self,
        params: &ContractParams,
        variable: SensitivityVariable,
        project: F,
    ) -> PricingResult<SweepCurve<S>>
    where
        S: Send,
        F: Fn(f64, &Valuation) -> S + Sync,
    {
        self.validate()?;

        let n = self.sample_count;
        let range = SweepRange::for_variable(variable, params);
        tracing::debug!(
            %variable,
            min = range.min,
            max = range.max,
            points = n + 1,
            parallel = self.parallel,
            "running sensitivity sweep"
        );

        let evaluate = |i: usize| {
            let value = range.point(i, n);
            let valuation = valuate(&params.with(variable, value));
            project(value, &valuation)
        };

        let samples: Vec<S> = if self.parallel {
            (0..=n).into_par_iter().map(evaluate).collect()
        } else {
            (0..=n).map(evaluate).collect()
        };

        Ok(SweepCurve {
            variable,
            range,
            samples,
        })
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            sample_count: DEFAULT_SAMPLE_COUNT,
            parallel: true,
        }
    }
}

/// Sweep `variable` over its range with `sample_count` intervals
///
/// # Errors
///
/// `PricingError::InvalidConfiguration` if `sample_count` is 0.
pub fn sweep(
    params: &ContractParams,
    variable: SensitivityVariable,
    sample_count: usize,
) -> PricingResult<SweepCurve> {
    SweepConfig {
        sample_count,
        ..Default::default()
    }
    .run(params, variable)
}

/// Like [`sweep`] but with a caller-chosen projection of each valuation
pub fn sweep_with<S, F>(
    params: &ContractParams,
    variable: SensitivityVariable,
    sample_count: usize,
    project: F,
) -> PricingResult<SweepCurve<S>>
where
    S: Send,
    F: Fn(f64, &Valuation) -> S + Sync,
{
    SweepConfig {
        sample_count,
        ..Default::default()
    }
    .run_with(params, variable, project)
}
