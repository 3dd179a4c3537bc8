// tests/greeks_test.rs
use bs_sensitivity::analytics::bs_analytic;
use bs_sensitivity::analytics::{greeks, price, valuate, ContractParams};

fn scenario() -> ContractParams {
    ContractParams {
        stock_price: 100.0,
        strike_price: 100.0,
        time_to_maturity: 0.25,
        volatility: 0.28,
        risk_free_rate: 0.05,
    }
}

#[test]
fn test_bs_call_price_analytic() {
    let analytic_price = bs_analytic::bs_call_price(100.0, 100.0, 0.05, 0.20, 1.0);
    let expected_price = 10.450583572185565;

    let rel_error = (analytic_price - expected_price).abs() / expected_price;
    println!("\nAnalytic Call: {}", analytic_price);
    println!("Expected Call: {}", expected_price);
    println!("Relative Error (Call): {}", rel_error);

    assert!(rel_error < 1e-5, "Relative error for call price exceeds tolerance: {}", rel_error);
}

#[test]
fn test_bs_call_gamma_analytic() {
    let analytic_gamma = bs_analytic::bs_call_gamma(100.0, 100.0, 0.05, 0.20, 1.0);
    let expected_gamma = 0.018762017345847;

    let rel_error = (analytic_gamma - expected_gamma).abs() / expected_gamma;
    println!("\nAnalytic Gamma: {}", analytic_gamma);
    println!("Expected Gamma: {}", expected_gamma);
    println!("Relative Error (Gamma): {}", rel_error);

    assert!(rel_error < 1e-9, "Relative error for Gamma exceeds tolerance: {}", rel_error);
}

#[test]
fn test_bs_call_vega_analytic() {
    // 37.524... per unit volatility, quoted per percentage point
    let analytic_vega = bs_analytic::bs_call_vega(100.0, 100.0, 0.05, 0.20, 1.0);
    let expected_vega = 37.524034691693792 / 100.0;

    let rel_error = (analytic_vega - expected_vega).abs() / expected_vega;
    println!("\nAnalytic Vega: {}", analytic_vega);
    println!("Expected Vega: {}", expected_vega);
    println!("Relative Error (Vega): {}", rel_error);

    assert!(rel_error < 1e-9, "Relative error for Vega exceeds tolerance: {}", rel_error);
}

#[test]
fn test_bs_call_theta_analytic() {
    // -6.414... per year, quoted per calendar day
    let analytic_theta = bs_analytic::bs_call_theta(100.0, 100.0, 0.05, 0.20, 1.0);
    let expected_theta = -6.414027546438197 / 365.0;

    let rel_error = ((analytic_theta - expected_theta) / expected_theta).abs();
    println!("\nAnalytic Theta: {}", analytic_theta);
    println!("Expected Theta: {}", expected_theta);
    println!("Relative Error (Theta): {}", rel_error);

    assert!(rel_error < 1e-5, "Relative error for Theta exceeds tolerance: {}", rel_error);
}

#[test]
fn test_bs_call_rho_analytic() {
    let analytic_rho = bs_analytic::bs_call_rho(100.0, 100.0, 0.05, 0.20, 1.0);
    let expected_rho = 0.5323248;

    let rel_error = (analytic_rho - expected_rho).abs() / expected_rho;
    assert!(rel_error < 1e-5, "Relative error for Rho exceeds tolerance: {}", rel_error);
}

#[test]
fn test_dashboard_default_scenario() {
    let params = scenario();
    let prices = price(&params);
    let g = greeks(&params);

    println!("\n=== Default Scenario ===");
    println!("Call: {:.6}  Put: {:.6}", prices.call_price, prices.put_price);
    println!("{:?}", g);

    assert!((prices.call_price - 6.189134).abs() < 1e-3);
    assert!((prices.put_price - 4.946914).abs() < 1e-3);
    assert!((g.call_delta - 0.563278).abs() < 1e-3);
    assert!((g.put_delta + 0.436722).abs() < 1e-3);
    assert!((g.gamma - 0.0282).abs() < 1e-3);
    assert!((g.vega - 0.1972).abs() < 1e-3);
    assert!((g.call_theta + 0.037086).abs() < 1e-4);
    assert!((g.put_theta + 0.023558).abs() < 1e-4);
    assert!((g.call_rho - 0.125347).abs() < 1e-4);
    assert!((g.put_rho + 0.121548).abs() < 1e-4);
}

#[test]
fn test_put_greeks_relations() {
    let params = scenario();
    let g = greeks(&params);
    let discounted_strike = params.strike_price * params.discount_factor();

    // Δ_call - Δ_put = 1
    assert!((g.call_delta - g.put_delta - 1.0).abs() < 1e-15);
    // ρ_call - ρ_put = K T e^(-rT) / 100
    let rho_gap = discounted_strike * params.time_to_maturity / 100.0;
    assert!((g.call_rho - g.put_rho - rho_gap).abs() < 1e-12);
    // Θ_put - Θ_call = r K e^(-rT) / 365
    let theta_gap = params.risk_free_rate * discounted_strike / 365.0;
    assert!((g.put_theta - g.call_theta - theta_gap).abs() < 1e-12);
}

#[test]
fn test_expiry_collapses_to_intrinsic() {
    let itm = ContractParams { stock_price: 110.0, time_to_maturity: 0.0, ..scenario() };
    let p = price(&itm);
    assert_eq!(p.call_price, 10.0);
    assert_eq!(p.put_price, 0.0);

    let otm = ContractParams { stock_price: 90.0, time_to_maturity: 0.0, ..scenario() };
    let p = price(&otm);
    assert_eq!(p.call_price, 0.0);
    assert_eq!(p.put_price, 10.0);

    let g = greeks(&otm);
    assert_eq!(g.call_delta, 0.0);
    assert_eq!(g.put_delta, -1.0);
    assert_eq!(g.gamma, 0.0);
}

#[test]
fn test_near_expiry_approaches_intrinsic() {
    for (s, k) in [(110.0, 100.0), (90.0, 100.0), (250.0, 200.0), (40.0, 55.0)] {
        let params = ContractParams { stock_price: s, strike_price: k, time_to_maturity: 1e-8, ..scenario() };
        let p = price(&params);
        assert!((p.call_price - f64::max(s - k, 0.0)).abs() < 1e-6, "call at S={} K={}", s, k);
        assert!((p.put_price - f64::max(k - s, 0.0)).abs() < 1e-6, "put at S={} K={}", s, k);
    }
}

#[test]
fn test_zero_volatility_is_discounted_forward_intrinsic() {
    let params = ContractParams { stock_price: 110.0, volatility: 0.0, time_to_maturity: 1.0, ..scenario() };
    let p = price(&params);
    let expected = 110.0 - 100.0 * (-0.05f64).exp();
    assert!((p.call_price - expected).abs() < 1e-12);
    assert_eq!(p.put_price, 0.0);
}

#[test]
fn test_at_the_money_tie_resolves_to_out_of_the_money() {
    // S == K with σ = 0: both d terms are -∞, the call is worthless and the
    // put's negative value K e^(-rT) - S is clamped to 0.
    let params = ContractParams { volatility: 0.0, time_to_maturity: 1.0, ..scenario() };
    let p = price(&params);
    assert_eq!(p.call_price, 0.0);
    assert_eq!(p.put_price, 0.0);

    let g = greeks(&params);
    assert_eq!(g.call_delta, 0.0);
    assert_eq!(g.put_delta, -1.0);
}

#[test]
fn test_negative_rate_is_supported() {
    let params = ContractParams { risk_free_rate: -0.01, ..scenario() };
    let v = valuate(&params);
    let parity = params.stock_price - params.strike_price * params.discount_factor();
    assert!((v.prices.call_price - v.prices.put_price - parity).abs() < 1e-9);
    assert!(v.greeks.call_theta.is_finite());
}
