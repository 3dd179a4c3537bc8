// demos/demo.rs
use bs_sensitivity::analytics::{bs_analytic, valuate, ContractParams, GreekSet};
use bs_sensitivity::display::{axis_label, format_currency, format_greek, format_tick};
use bs_sensitivity::output;
use bs_sensitivity::sweep::{sweep, sweep_with, SensitivityVariable, DEFAULT_SAMPLE_COUNT};

fn main() {
    println!("Running bs-sensitivity Demo\n");

    let params = ContractParams::default();
    let valuation = valuate(&params);

    println!("--- Valuation (S=100, K=100, T=0.25, σ=28%, r=5%) ---");
    println!("Call Price: {}", format_currency(valuation.prices.call_price));
    println!("Put Price:  {}", format_currency(valuation.prices.put_price));
    for (name, value) in valuation.greeks.select(GreekSet::ALL) {
        println!("{:<11} {}", format!("{}:", name), format_greek(value));
    }

    // Put-call parity: C - P = S - K e^(-rT)
    let parity_lhs = valuation.prices.call_price - valuation.prices.put_price;
    let parity_rhs = params.stock_price - params.strike_price * params.discount_factor();
    println!("\nPut-call parity gap: {:.2e}", (parity_lhs - parity_rhs).abs());

    // Intrinsic value at expiry
    let expired = ContractParams { time_to_maturity: 0.0, stock_price: 110.0, ..params };
    println!(
        "Expired ITM call: {} (intrinsic {})",
        format_currency(bs_analytic::price(&expired).call_price),
        format_currency(10.0)
    );

    for variable in SensitivityVariable::ALL {
        let curve = match sweep(&params, variable, DEFAULT_SAMPLE_COUNT) {
            Ok(curve) => curve,
            Err(e) => {
                eprintln!("Sweep over {} failed: {}", variable, e);
                continue;
            }
        };
        println!("\n--- Sensitivity to {} ({} points) ---", axis_label(variable), curve.len());
        for sample in curve.iter().step_by(10) {
            println!(
                "{:>10}  call {:>9}  put {:>9}  delta {:>7}  gamma {:>7}",
                format_tick(variable, sample.value),
                format_currency(sample.call_price),
                format_currency(sample.put_price),
                format_greek(sample.call_delta),
                format_greek(sample.gamma)
            );
        }
    }

    // Custom projection: put-side Greeks along the spot axis
    if let Ok(curve) = sweep_with(&params, SensitivityVariable::StockPrice, 4, |s, v| {
        (s, v.greeks.put_delta, v.greeks.put_theta)
    }) {
        println!("\n--- Put Greeks vs Stock Price ---");
        for (s, delta, theta) in &curve {
            println!("{:>10}  put delta {:>8}  put theta {:>8}", format_currency(*s), format_greek(*delta), format_greek(*theta));
        }
    }

    match sweep(&params, SensitivityVariable::Volatility, DEFAULT_SAMPLE_COUNT)
        .and_then(|curve| output::write_sweep_to_csv("volatility_sweep.csv", &curve, GreekSet::CHART))
    {
        Ok(()) => println!("\nVolatility sweep written to volatility_sweep.csv"),
        Err(e) => eprintln!("\nCould not write sweep: {}", e),
    }
}
