// tests/integration_test.rs
use bs_sensitivity::analytics::{valuate, ContractParams, GreekSet};
use bs_sensitivity::controls;
use bs_sensitivity::output;
use bs_sensitivity::sweep::{sweep, sweep_with, SensitivityVariable, SweepConfig, SweepSample};

#[test]
fn test_volatility_sweep_endpoints() {
    let curve = sweep(&ContractParams::default(), SensitivityVariable::Volatility, 50)
        .expect("valid sample count");

    assert_eq!(curve.len(), 51);
    assert_eq!(curve.samples[0].value, 0.05);
    assert_eq!(curve.samples[50].value, 0.6);
    assert_eq!(curve.range.min, 0.05);
    assert_eq!(curve.range.max, 0.6);
}

#[test]
fn test_sweep_sample_count_plus_one() {
    for n in [1, 7, 50, 200] {
        for variable in SensitivityVariable::ALL {
            let curve = sweep(&ContractParams::default(), variable, n).expect("valid sample count");
            assert_eq!(curve.len(), n + 1, "{} with {} intervals", variable, n);
            assert_eq!(curve.variable, variable);
        }
    }
}

#[test]
fn test_relative_ranges_follow_base_value() {
    let params = ContractParams { stock_price: 250.0, strike_price: 40.0, ..Default::default() };

    let spot = sweep(&params, SensitivityVariable::StockPrice, 50).expect("valid sample count");
    assert_eq!(spot.samples.first().map(|s| s.value), Some(200.0));
    assert_eq!(spot.samples.last().map(|s| s.value), Some(300.0));

    let strike = sweep(&params, SensitivityVariable::StrikePrice, 50).expect("valid sample count");
    assert_eq!(strike.samples.first().map(|s| s.value), Some(32.0));
    assert_eq!(strike.samples.last().map(|s| s.value), Some(48.0));

    // Absolute ranges do not move with the base value
    let time = sweep(&params, SensitivityVariable::TimeToMaturity, 50).expect("valid sample count");
    assert_eq!(time.samples.first().map(|s| s.value), Some(0.01));
    assert_eq!(time.samples.last().map(|s| s.value), Some(1.0));

    let rate = sweep(&params, SensitivityVariable::RiskFreeRate, 50).expect("valid sample count");
    assert_eq!(rate.samples.first().map(|s| s.value), Some(0.01));
    assert_eq!(rate.samples.last().map(|s| s.value), Some(0.1));
}

#[test]
fn test_sweep_points_are_evenly_spaced() {
    let curve = sweep(&ContractParams::default(), SensitivityVariable::TimeToMaturity, 50)
        .expect("valid sample count");
    let step = (1.0 - 0.01) / 50.0;
    for pair in curve.samples.windows(2) {
        assert!((pair[1].value - pair[0].value - step).abs() < 1e-12);
    }
}

#[test]
fn test_sweep_samples_match_direct_valuation() {
    let base = ContractParams::default();
    let curve = sweep(&base, SensitivityVariable::StrikePrice, 20).expect("valid sample count");

    for sample in &curve {
        let direct = valuate(&base.with(SensitivityVariable::StrikePrice, sample.value));
        assert_eq!(*sample, SweepSample::from_valuation(sample.value, &direct));
    }
}

#[test]
fn test_parallel_and_sequential_sweeps_agree() {
    let base = ContractParams::new(87.5, 92.0, 0.6, 0.33, 0.021);
    for variable in SensitivityVariable::ALL {
        let parallel = SweepConfig { sample_count: 120, parallel: true }
            .run(&base, variable)
            .expect("valid sample count");
        let sequential = SweepConfig { sample_count: 120, parallel: false }
            .run(&base, variable)
            .expect("valid sample count");
        assert_eq!(parallel, sequential);
    }
}

#[test]
fn test_sweep_does_not_touch_base_params() {
    let base = ContractParams::default();
    let before = base;
    let first = sweep(&base, SensitivityVariable::StockPrice, 50).expect("valid sample count");
    let second = sweep(&base, SensitivityVariable::StockPrice, 50).expect("valid sample count");
    assert_eq!(base, before);
    assert_eq!(first, second);
}

#[test]
fn test_stock_sweep_monotonicity() {
    let curve = sweep(&ContractParams::default(), SensitivityVariable::StockPrice, 50)
        .expect("valid sample count");
    for pair in curve.samples.windows(2) {
        assert!(pair[1].call_price > pair[0].call_price);
        assert!(pair[1].put_price < pair[0].put_price);
        assert!(pair[1].call_delta >= pair[0].call_delta);
    }
}

#[test]
fn test_strike_sweep_monotonicity() {
    let curve = sweep(&ContractParams::default(), SensitivityVariable::StrikePrice, 50)
        .expect("valid sample count");
    for pair in curve.samples.windows(2) {
        assert!(pair[1].call_price < pair[0].call_price);
        assert!(pair[1].put_price > pair[0].put_price);
    }
}

#[test]
fn test_volatility_and_time_sweeps_increase_call_value() {
    let base = ContractParams::default();
    for variable in [SensitivityVariable::Volatility, SensitivityVariable::TimeToMaturity] {
        let curve = sweep(&base, variable, 50).expect("valid sample count");
        for pair in curve.samples.windows(2) {
            assert!(pair[1].call_price > pair[0].call_price, "{}", variable);
        }
    }
}

#[test]
fn test_custom_projection() {
    let curve = sweep_with(&ContractParams::default(), SensitivityVariable::StockPrice, 10, |s, v| {
        (s, v.greeks.put_delta)
    })
    .expect("valid sample count");
    assert_eq!(curve.len(), 11);
    assert!(curve.iter().all(|(_, delta)| (-1.0..=0.0).contains(delta)));
}

#[test]
fn test_clamp_validate_then_sweep() {
    let raw = ContractParams::new(1500.0, 100.0, 5.0, 0.0, -0.02);
    assert!(controls::validate(&raw).is_err());

    let params = raw.clamped();
    assert!(controls::validate(&params).is_ok());
    let curve = sweep(&params, SensitivityVariable::StockPrice, 50).expect("valid sample count");
    assert_eq!(curve.samples[0].value, 800.0);
    assert!(curve.iter().all(|s| s.call_price.is_finite() && s.gamma.is_finite()));
}

#[test]
fn test_sweep_csv_round_trip_to_disk() {
    let curve = sweep(&ContractParams::default(), SensitivityVariable::RiskFreeRate, 10)
        .expect("valid sample count");
    let path = std::env::temp_dir().join(format!("bs_sensitivity_sweep_{}.csv", std::process::id()));

    output::write_sweep_to_csv(&path, &curve, GreekSet::CHART).expect("writable temp dir");
    let text = std::fs::read_to_string(&path).expect("file just written");
    std::fs::remove_file(&path).ok();

    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("risk_free_rate,call_price,put_price,call_delta,gamma,vega,call_theta,call_rho")
    );
    assert_eq!(lines.count(), 11);
}

#[test]
fn test_summary_csv_to_disk() {
    let path = std::env::temp_dir().join(format!("bs_sensitivity_summary_{}.csv", std::process::id()));
    output::write_summary_to_csv(&path, &valuate(&ContractParams::default())).expect("writable temp dir");
    let text = std::fs::read_to_string(&path).expect("file just written");
    std::fs::remove_file(&path).ok();

    assert!(text.starts_with("key,value\ngenerated_at,"));
    assert!(text.contains("\ncall_price,"));
    assert!(text.contains("\nput_rho,"));
}
