// scripts/dashboard.rs
use bs_sensitivity::analytics::{valuate, ContractParams, GreekSet, Valuation};
use bs_sensitivity::controls::{self, CONTROLS};
use bs_sensitivity::display::{axis_label, format_currency, format_greek, format_tick, format_value};
use bs_sensitivity::output;
use bs_sensitivity::sweep::{SensitivityVariable, SweepConfig, SweepCurve, DEFAULT_SAMPLE_COUNT};
use bs_sensitivity::PricingResult;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Black-Scholes sensitivity dashboard
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about)]
struct Cli {
    /// Current price of the underlying (S)
    #[arg(long, default_value_t = 100.0)]
    stock: f64,

    /// Strike price (K)
    #[arg(long, default_value_t = 100.0)]
    strike: f64,

    /// Time to maturity in years (T)
    #[arg(long, default_value_t = 0.25)]
    maturity: f64,

    /// Annualized volatility as a decimal (σ)
    #[arg(long, default_value_t = 0.28)]
    volatility: f64,

    /// Annualized risk-free rate as a decimal (r)
    #[arg(long, default_value_t = 0.05)]
    rate: f64,

    /// Variable to sweep: stock, strike, maturity, volatility or rate
    #[arg(long, default_value = "stock_price")]
    sweep: SensitivityVariable,

    /// Number of sweep intervals
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Greeks to include in the sweep table and CSV, e.g. "gamma,vega" or "chart"
    #[arg(long, default_value = "chart")]
    greeks: String,

    /// Write the sweep curve to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a key/value summary of the valuation to this CSV file
    #[arg(long)]
    summary_csv: Option<PathBuf>,

    /// Print a JSON document instead of the text dashboard
    #[arg(long)]
    json: bool,

    /// Reject out-of-range inputs instead of clamping them to the control bounds
    #[arg(long)]
    no_clamp: bool,

    /// Evaluate sweep samples on the current thread
    #[arg(long)]
    sequential: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    valuation: &'a Valuation,
    sweep: &'a SweepCurve,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> PricingResult<()> {
    let raw = ContractParams::new(cli.stock, cli.strike, cli.maturity, cli.volatility, cli.rate);
    let params = if cli.no_clamp {
        raw
    } else {
        let clamped = raw.clamped();
        if clamped != raw {
            tracing::warn!(?raw, ?clamped, "inputs clamped to control bounds");
        }
        clamped
    };
    controls::validate(&params)?;

    let greek_set = GreekSet::parse_list(&cli.greeks).ok_or_else(|| {
        bs_sensitivity::PricingError::InvalidConfiguration {
            field: "greeks".to_string(),
            reason: format!("unrecognised Greek in '{}'", cli.greeks),
        }
    })?;

    let config = SweepConfig {
        sample_count: cli.samples,
        parallel: !cli.sequential,
    };
    let valuation = valuate(&params);
    let curve = config.run(&params, cli.sweep)?;
    tracing::info!(variable = %cli.sweep, points = curve.len(), "valuation complete");

    if let Some(path) = &cli.csv {
        output::write_sweep_to_csv(path, &curve, greek_set)?;
        tracing::info!(path = %path.display(), "sweep written");
    }
    if let Some(path) = &cli.summary_csv {
        output::write_summary_to_csv(path, &valuation)?;
        tracing::info!(path = %path.display(), "summary written");
    }

    if cli.json {
        let report = Report {
            valuation: &valuation,
            sweep: &curve,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_dashboard(&valuation, &curve, greek_set);
    }
    Ok(())
}

fn print_dashboard(valuation: &Valuation, curve: &SweepCurve, greek_set: GreekSet) {
    println!("Black-Scholes Sensitivity Analysis");
    println!("==================================\n");

    println!("Model Parameters");
    for spec in &CONTROLS {
        println!(
            "  {:<22} {:>12}",
            spec.label,
            format_value(spec.variable, valuation.params.get(spec.variable))
        );
    }

    println!("\nOption Prices");
    println!("  {:<22} {:>12}", "Call", format_currency(valuation.prices.call_price));
    println!("  {:<22} {:>12}", "Put", format_currency(valuation.prices.put_price));

    println!("\nGreeks");
    for (name, value) in valuation.greeks.select(GreekSet::ALL) {
        println!("  {:<22} {:>12}", name, format_greek(value));
    }

    let columns = (greek_set & GreekSet::CHART).named_flags();
    println!("\nSensitivity to {}", axis_label(curve.variable));
    print!("{:>12} {:>12} {:>12}", curve.variable.name(), "call_price", "put_price");
    for (_, name) in &columns {
        print!(" {:>12}", name);
    }
    println!();
    for sample in curve {
        print!(
            "{:>12} {:>12} {:>12}",
            format_tick(curve.variable, sample.value),
            format_currency(sample.call_price),
            format_currency(sample.put_price)
        );
        for (flag, _) in &columns {
            if let Some(value) = sample.greek(*flag) {
                print!(" {:>12}", format_greek(value));
            }
        }
        println!();
    }
}
