//! # bs-sensitivity: Black-Scholes Pricing and Sensitivity Sweeps
//!
//! A Rust library that prices European options under the Black-Scholes model,
//! computes the full set of Greeks, and regenerates sensitivity curves as one
//! input is varied at a time. It is the engine behind an interactive option
//! pricing dashboard.
//!
//! ## Key Features
//!
//! - **Closed-form pricing**: call and put prices from one d₁/d₂ evaluation
//! - **Complete Greeks**: call/put Delta, Gamma, Vega, call/put Theta, call/put Rho
//! - **Sensitivity sweeps**: 51-point curves over a fixed range per variable
//! - **Total over its domain**: zero volatility or maturity collapse to intrinsic value
//! - **Dashboard boundary**: control bounds, display formatting, CSV export
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_sensitivity::analytics::{price, greeks, ContractParams};
//! use bs_sensitivity::sweep::{sweep, SensitivityVariable, DEFAULT_SAMPLE_COUNT};
//!
//! let params = ContractParams {
//!     stock_price: 100.0,
//!     strike_price: 100.0,
//!     time_to_maturity: 0.25,
//!     volatility: 0.28,
//!     risk_free_rate: 0.05,
//! };
//!
//! let prices = price(&params);
//! let g = greeks(&params);
//! println!("Call {:.4}  Put {:.4}  Delta {:.4}", prices.call_price, prices.put_price, g.call_delta);
//!
//! let curve = sweep(&params, SensitivityVariable::Volatility, DEFAULT_SAMPLE_COUNT)
//!     .expect("non-zero sample count");
//! assert_eq!(curve.len(), 51);
//! ```
//!
//! ## Mathematical Foundation
//!
//! Prices follow the Black-Scholes closed form with the standard normal CDF
//! evaluated through the Abramowitz-Stegun error function approximation
//! (absolute error below 1.5e-7). Vega and Rho are quoted per percentage
//! point, Theta per calendar day of a 365-day year.

// Module declarations
pub mod error;
pub mod math_utils;
pub mod analytics;
pub mod sweep;
pub mod controls;
pub mod display;
pub mod output;

// Re-export commonly used types for convenience
pub use analytics::{greeks, price, valuate, ContractParams, GreekSet, Greeks, OptionPrices, Valuation};
pub use error::{PricingError, PricingResult};
pub use sweep::{sweep, SensitivityVariable, SweepCurve, SweepSample};
