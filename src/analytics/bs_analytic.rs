// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x).
//!
//! # Domain
//!
//! Every function here is total over finite floats. Zero or negative
//! volatility/maturity collapses d₁ and d₂ to ±∞ so prices land on intrinsic
//! value. Negative spot or strike are not guarded: `ln` yields NaN and the
//! NaN propagates to the caller (garbage in, garbage out). Validate at the
//! boundary with [`crate::controls::validate`].

use crate::math_utils::{norm_cdf, norm_pdf};
use crate::sweep::SensitivityVariable;
use serde::{Deserialize, Serialize};

/// Days per year used to express theta per calendar day
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Scale for vega and rho: sensitivity per 1 percentage point
pub const PERCENT: f64 = 100.0;

/// Market and contract inputs for one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractParams {
    /// Current price of the underlying (S)
    pub stock_price: f64,
    /// Option strike (K)
    pub strike_price: f64,
    /// Years remaining (T)
    pub time_to_maturity: f64,
    /// Annualized volatility as a decimal (σ)
    pub volatility: f64,
    /// Annualized risk-free rate as a decimal (r)
    pub risk_free_rate: f64,
}

impl ContractParams {
    pub fn new(
        stock_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Self {
        ContractParams {
            stock_price,
            strike_price,
            time_to_maturity,
            volatility,
            risk_free_rate,
        }
    }

    /// Value of the field named by `variable`
    pub fn get(&self, variable: SensitivityVariable) -> f64 {
        match variable {
            SensitivityVariable::StockPrice => self.stock_price,
            SensitivityVariable::StrikePrice => self.strike_price,
            SensitivityVariable::TimeToMaturity => self.time_to_maturity,
            SensitivityVariable::Volatility => self.volatility,
            SensitivityVariable::RiskFreeRate => self.risk_free_rate,
        }
    }

    /// Copy of `self` with only the field named by `variable` replaced
    pub fn with(&self, variable: SensitivityVariable, value: f64) -> Self {
        let mut params = *self;
        match variable {
            SensitivityVariable::StockPrice => params.stock_price = value,
            SensitivityVariable::StrikePrice => params.strike_price = value,
            SensitivityVariable::TimeToMaturity => params.time_to_maturity = value,
            SensitivityVariable::Volatility => params.volatility = value,
            SensitivityVariable::RiskFreeRate => params.risk_free_rate = value,
        }
        params
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

impl Default for ContractParams {
    /// At-the-money, three months, 28% vol, 5% rate
    fn default() -> Self {
        ContractParams {
            stock_price: 100.0,
            strike_price: 100.0,
            time_to_maturity: 0.25,
            volatility: 0.28,
            risk_free_rate: 0.05,
        }
    }
}

/// Theoretical call and put prices, both floored at zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionPrices {
    pub call_price: f64,
    pub put_price: f64,
}

/// The full set of Black-Scholes sensitivities
///
/// Vega and rho are per 1 percentage point, theta is per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub call_delta: f64,
    pub put_delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub call_theta: f64,
    pub put_theta: f64,
    pub call_rho: f64,
    pub put_rho: f64,
}

/// Prices and Greeks evaluated from one parameter set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub params: ContractParams,
    pub prices: OptionPrices,
    pub greeks: Greeks,
}

/// Standardized moneyness terms d₁ and d₂
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
///
/// When σ ≤ 0 or T ≤ 0 both terms are +∞ if S > K and -∞ otherwise.
/// S == K therefore resolves to -∞.
pub fn d1_d2(params: &ContractParams) -> (f64, f64) {
    let ContractParams {
        stock_price: s,
        strike_price: k,
        time_to_maturity: t,
        volatility: sigma,
        risk_free_rate: r,
    } = *params;

    if sigma <= 0.0 || t <= 0.0 {
        let limit = if s > k { f64::INFINITY } else { f64::NEG_INFINITY };
        tracing::trace!(sigma, t, limit, "degenerate d1/d2");
        return (limit, limit);
    }

    let sigma_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Black-Scholes European call and put prices
///
/// # Formula
/// ```text
/// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// P = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
///
/// Negative results from cancellation near the degenerate boundary are
/// clamped to exactly 0.
pub fn price(params: &ContractParams) -> OptionPrices {
    let (d1, d2) = d1_d2(params);
    prices_from(params, d1, d2)
}

/// Black-Scholes Greeks for the call and the put
///
/// # Formulas
/// ```text
/// Δ_call = Φ(d₁)                 Δ_put = Φ(d₁) - 1
/// Γ      = φ(d₁) / (S σ √T)
/// ν      = S φ(d₁) √T / 100
/// Θ_call = [-S φ(d₁) σ / (2√T) - r K e^(-rT) Φ(d₂)]  / 365
/// Θ_put  = [-S φ(d₁) σ / (2√T) + r K e^(-rT) Φ(-d₂)] / 365
/// ρ_call =  K T e^(-rT) Φ(d₂)  / 100
/// ρ_put  = -K T e^(-rT) Φ(-d₂) / 100
/// ```
///
/// No clamping is applied. In the degenerate case φ(±∞) = 0, and gamma,
/// vega and the diffusion part of theta take their limiting value 0 instead
/// of the 0/0 the raw formula would produce.
pub fn greeks(params: &ContractParams) -> Greeks {
    let (d1, d2) = d1_d2(params);
    greeks_from(params, d1, d2)
}

/// Prices and Greeks from a single d₁/d₂ evaluation
pub fn valuate(params: &ContractParams) -> Valuation {
    let (d1, d2) = d1_d2(params);
    Valuation {
        params: *params,
        prices: prices_from(params, d1, d2),
        greeks: greeks_from(params, d1, d2),
    }
}

fn prices_from(params: &ContractParams, d1: f64, d2: f64) -> OptionPrices {
    let s = params.stock_price;
    let discounted_strike = params.strike_price * params.discount_factor();

    let call = s * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put = discounted_strike * norm_cdf(-d2) - s * norm_cdf(-d1);

    OptionPrices {
        call_price: call.max(0.0),
        put_price: put.max(0.0),
    }
}

fn greeks_from(params: &ContractParams, d1: f64, d2: f64) -> Greeks {
    let ContractParams {
        stock_price: s,
        strike_price: k,
        time_to_maturity: t,
        volatility: sigma,
        risk_free_rate: r,
    } = *params;

    let pdf_d1 = norm_pdf(d1);
    let n_d1 = norm_cdf(d1);
    let n_d2 = norm_cdf(d2);
    let n_minus_d2 = norm_cdf(-d2);
    let discounted_strike = k * params.discount_factor();
    let sqrt_t = t.sqrt();

    // φ(d₁) == 0 only when d₁ is ±∞ or far in the tails; the limit is 0.
    let (gamma, vega, decay) = if pdf_d1 == 0.0 {
        (0.0, 0.0, 0.0)
    } else {
        (
            pdf_d1 / (s * sigma * sqrt_t),
            s * pdf_d1 * sqrt_t / PERCENT,
            -(s * pdf_d1 * sigma) / (2.0 * sqrt_t),
        )
    };

    Greeks {
        call_delta: n_d1,
        put_delta: n_d1 - 1.0,
        gamma,
        vega,
        call_theta: (decay - r * discounted_strike * n_d2) / DAYS_PER_YEAR,
        put_theta: (decay + r * discounted_strike * n_minus_d2) / DAYS_PER_YEAR,
        call_rho: discounted_strike * t * n_d2 / PERCENT,
        put_rho: -discounted_strike * t * n_minus_d2 / PERCENT,
    }
}

/// Black-Scholes European call option price
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    price(&ContractParams::new(s, k, t, sigma, r)).call_price
}

/// Black-Scholes European put option price
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    price(&ContractParams::new(s, k, t, sigma, r)).put_price
}

/// Black-Scholes Delta (∂C/∂S) for European call
///
/// # Interpretation
/// - Hedge ratio: number of shares to buy per option sold
/// - Range: [0, 1] for calls
pub fn bs_call_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    greeks(&ContractParams::new(s, k, t, sigma, r)).call_delta
}

/// Black-Scholes Gamma (∂²V/∂S²), same for calls and puts
pub fn bs_call_gamma(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    greeks(&ContractParams::new(s, k, t, sigma, r)).gamma
}

/// Black-Scholes Vega per 1% volatility change
pub fn bs_call_vega(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    greeks(&ContractParams::new(s, k, t, sigma, r)).vega
}

/// Black-Scholes Theta for European call, per calendar day
///
/// # Interpretation
/// - Time decay of option value
/// - Usually negative for long options
pub fn bs_call_theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    greeks(&ContractParams::new(s, k, t, sigma, r)).call_theta
}

/// Black-Scholes Rho for European call, per 1% rate change
pub fn bs_call_rho(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    greeks(&ContractParams::new(s, k, t, sigma, r)).call_rho
}
