// scripts/benchmark.rs
use bs_sensitivity::analytics::{greeks, price, valuate, ContractParams};
use bs_sensitivity::controls::ControlSpec;
use bs_sensitivity::math_utils::Timer;
use bs_sensitivity::sweep::{SensitivityVariable, SweepConfig, DEFAULT_SAMPLE_COUNT};
use bs_sensitivity::PricingResult;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs::File;
use std::hint::black_box;
use std::io::{BufWriter, Write};

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        SystemInfo {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    evaluations: usize,
    time_ms: f64,
    throughput_per_sec: f64,
    checksum: f64,
}

impl BenchmarkResult {
    fn new(name: impl Into<String>, evaluations: usize, time_ms: f64, checksum: f64) -> Self {
        BenchmarkResult {
            name: name.into(),
            evaluations,
            time_ms,
            throughput_per_sec: evaluations as f64 / (time_ms / 1000.0),
            checksum,
        }
    }
}

/// Random parameter sets drawn uniformly inside the control bounds
fn random_params(count: usize, seed: u64) -> Vec<ContractParams> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut draw = |var: SensitivityVariable| {
        let spec = ControlSpec::for_variable(var);
        rng.gen_range(spec.min..=spec.max)
    };
    (0..count)
        .map(|_| {
            ContractParams::new(
                draw(SensitivityVariable::StockPrice),
                draw(SensitivityVariable::StrikePrice),
                draw(SensitivityVariable::TimeToMaturity),
                draw(SensitivityVariable::Volatility),
                draw(SensitivityVariable::RiskFreeRate),
            )
        })
        .collect()
}

fn run_pricing_benchmarks(inputs: &[ContractParams]) -> Vec<BenchmarkResult> {
    let n = inputs.len();
    let mut results = Vec::new();
    let mut timer = Timer::new();

    println!("Pricing {} parameter sets...", n);
    timer.start();
    let checksum: f64 = inputs.iter().map(|p| black_box(price(p)).call_price).sum();
    results.push(BenchmarkResult::new("price", n, timer.elapsed_ms(), checksum));

    timer.start();
    let checksum: f64 = inputs.iter().map(|p| black_box(greeks(p)).gamma).sum();
    results.push(BenchmarkResult::new("greeks", n, timer.elapsed_ms(), checksum));

    timer.start();
    let checksum: f64 = inputs.iter().map(|p| black_box(valuate(p)).greeks.vega).sum();
    results.push(BenchmarkResult::new("valuate", n, timer.elapsed_ms(), checksum));

    results
}

fn run_sweep_benchmarks(inputs: &[ContractParams]) -> PricingResult<Vec<BenchmarkResult>> {
    let mut results = Vec::new();
    let mut timer = Timer::new();

    for parallel in [false, true] {
        let config = SweepConfig {
            sample_count: DEFAULT_SAMPLE_COUNT,
            parallel,
        };
        println!(
            "Sweeping {} parameter sets ({})...",
            inputs.len(),
            if parallel { "parallel" } else { "sequential" }
        );

        timer.start();
        let mut checksum = 0.0;
        let mut evaluations = 0;
        for (i, params) in inputs.iter().enumerate() {
            let variable = SensitivityVariable::ALL[i % SensitivityVariable::ALL.len()];
            let curve = config.run(params, variable)?;
            evaluations += curve.len();
            checksum += curve.iter().map(|s| s.call_price).sum::<f64>();
        }
        let name = format!("sweep ({})", if parallel { "parallel" } else { "sequential" });
        results.push(BenchmarkResult::new(name, evaluations, timer.elapsed_ms(), checksum));
    }

    Ok(results)
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);

    writeln!(file, "# System Information")?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "#")?;
    writeln!(file, "Benchmark,Evaluations,Time_ms,Throughput_per_sec,Checksum")?;

    for result in results {
        writeln!(
            file,
            "{},{},{:.3},{:.0},{:.6}",
            result.name, result.evaluations, result.time_ms, result.throughput_per_sec, result.checksum
        )?;
    }
    file.flush()
}

fn main() {
    println!("bs-sensitivity Benchmark Suite");
    println!("==============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    let count: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1_000_000);
    let inputs = random_params(count, 42);

    let mut all_results = run_pricing_benchmarks(&inputs);
    match run_sweep_benchmarks(&inputs[..inputs.len().min(10_000)]) {
        Ok(results) => all_results.extend(results),
        Err(e) => {
            eprintln!("Sweep benchmark failed: {}", e);
            std::process::exit(1);
        }
    }

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<24} {:>12} {:>12} {:>16} {:>12}",
        "Benchmark", "Evaluations", "Time (ms)", "Throughput/s", "Checksum"
    );
    println!("{:-<80}", "");
    for result in &all_results {
        println!(
            "{:<24} {:>12} {:>12.2} {:>16.0} {:>12.4}",
            result.name, result.evaluations, result.time_ms, result.throughput_per_sec, result.checksum
        );
    }
    println!("{:=<80}", "");

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&all_results, &system_info, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(e) => eprintln!("\nCould not write {}: {}", filename, e),
    }
}
