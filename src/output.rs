// src/output.rs
use crate::analytics::bs_analytic::Valuation;
use crate::analytics::greeks::GreekSet;
use crate::error::PricingResult;
use crate::sweep::{SweepCurve, SweepSample};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a sweep curve as CSV
///
/// Columns are the swept variable, both prices and the chart Greeks present
/// in `greeks`. Put-side flags are ignored because sweep samples carry only
/// the call side.
pub fn write_sweep_csv<W: Write>(
    out: &mut W,
    curve: &SweepCurve<SweepSample>,
    greeks: GreekSet,
) -> PricingResult<()> {
    let columns = (greeks & GreekSet::CHART).named_flags();

    write!(out, "{},call_price,put_price", curve.variable.name())?;
    for (_, name) in &columns {
        write!(out, ",{}", name)?;
    }
    writeln!(out)?;

    for sample in curve {
        write!(out, "{},{},{}", sample.value, sample.call_price, sample.put_price)?;
        for (flag, _) in &columns {
            if let Some(value) = sample.greek(*flag) {
                write!(out, ",{}", value)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_sweep_to_csv<P: AsRef<Path>>(
    filename: P,
    curve: &SweepCurve<SweepSample>,
    greeks: GreekSet,
) -> PricingResult<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_sweep_csv(&mut file, curve, greeks)?;
    file.flush()?;
    Ok(())
}

/// Key/value rows for one valuation: parameters, prices and all Greeks
pub fn summary_rows(valuation: &Valuation) -> Vec<(&'static str, f64)> {
    let Valuation {
        params,
        prices,
        greeks,
    } = valuation;
    let mut rows = vec![
        ("stock_price", params.stock_price),
        ("strike_price", params.strike_price),
        ("time_to_maturity", params.time_to_maturity),
        ("volatility", params.volatility),
        ("risk_free_rate", params.risk_free_rate),
        ("call_price", prices.call_price),
        ("put_price", prices.put_price),
    ];
    rows.extend(greeks.select(GreekSet::ALL));
    rows
}

pub fn write_summary_to_csv<P: AsRef<Path>>(filename: P, valuation: &Valuation) -> PricingResult<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    writeln!(file, "key,value")?;
    writeln!(
        file,
        "generated_at,{}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    for (key, value) in summary_rows(valuation) {
        writeln!(file, "{},{}", key, value)?;
    }
    file.flush()?;
    Ok(())
}
