// demos/error_handling_demo.rs
use bs_sensitivity::analytics::{greeks, price, ContractParams};
use bs_sensitivity::controls;
use bs_sensitivity::error::PricingError;
use bs_sensitivity::sweep::{sweep, SensitivityVariable};

fn main() {
    println!("Error Handling Demo for bs-sensitivity");
    println!("======================================\n");

    // Test 1: Out-of-bounds input rejected at the boundary
    println!("1. Testing negative stock price...");
    let negative_spot = ContractParams {
        stock_price: -100.0,
        ..Default::default()
    };
    match controls::validate(&negative_spot) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: The engine itself does not guard the sign domain
    println!("\n2. Pricing the same input without validation...");
    let g = greeks(&negative_spot);
    println!("   Call delta = {} (garbage in, garbage out)", g.call_delta);

    // Test 3: Clamping instead of rejecting
    println!("\n3. Clamping to control bounds...");
    let clamped = negative_spot.clamped();
    println!("   ✓ Stock price clamped to {}", clamped.stock_price);

    // Test 4: Degenerate but valid inputs
    println!("\n4. Testing zero volatility and zero maturity...");
    for params in [
        ContractParams { volatility: 0.0, stock_price: 120.0, ..Default::default() },
        ContractParams { time_to_maturity: 0.0, stock_price: 80.0, ..Default::default() },
        ContractParams { time_to_maturity: 0.0, ..Default::default() },
    ] {
        let p = price(&params);
        let g = greeks(&params);
        println!(
            "   ✓ S={} σ={} T={}: call={:.4} put={:.4} gamma={}",
            params.stock_price, params.volatility, params.time_to_maturity, p.call_price, p.put_price, g.gamma
        );
    }

    // Test 5: Invalid sweep configuration
    println!("\n5. Testing zero sample count...");
    match sweep(&ContractParams::default(), SensitivityVariable::Volatility, 0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Unknown sensitivity variable
    println!("\n6. Testing unknown variable name...");
    match "dividend_yield".parse::<SensitivityVariable>() {
        Ok(v) => println!("   Unexpected: parsed {}", v),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 7: Error type matching
    println!("\n7. Testing error type matching...");
    let bad = ContractParams {
        risk_free_rate: 0.5,
        ..Default::default()
    };
    match controls::validate(&bad) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricingError::InvalidParameters { parameter, value, constraint }) => {
            println!("   ✓ Caught InvalidParameters: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
}
