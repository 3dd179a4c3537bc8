//! Closed-form Black-Scholes analytics
pub mod bs_analytic;
pub mod greeks;

pub use bs_analytic::{
    d1_d2, greeks, price, valuate, ContractParams, Greeks, OptionPrices, Valuation,
};
pub use greeks::GreekSet;
