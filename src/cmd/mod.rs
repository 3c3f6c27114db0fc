use anyhow::{Context, Result};
use itamaraca::driver;
use itamaraca::format::{self, RULE};
use itamaraca::stats::{Histogram, Summary};
use itamaraca::{Overrides, RunConfig};
use std::io;
use std::path::Path;

use crate::progress::Bar;

const HISTOGRAM_WIDTH: usize = 50;

fn load(config: Option<&Path>, overrides: Overrides) -> Result<RunConfig> {
    let config = RunConfig::resolve(config, overrides).context("Failed to load configuration")?;
    tracing::info!(
        "samples={} max_value={} seeds={:?} lambda={}",
        config.samples,
        config.max_value,
        config.seeds,
        config.lambda
    );
    Ok(config)
}

pub fn generate(config: Option<&Path>, overrides: Overrides) -> Result<()> {
    let config = load(config, overrides)?;
    let mut generator = config.generator()?;

    println!("--- Itamaraca PRNG Simulation ---");
    println!("Generating {} numbers...", config.samples);

    let bar = Bar::new("Writing", config.samples as u64);
    let report = driver::run(&mut generator, config.samples, &config.output, |_| bar.inc(1))
        .with_context(|| format!("Failed to export {}", config.output.display()))?;
    drop(bar);

    report.render(&mut io::stdout().lock())?;
    Ok(())
}

pub fn stats(config: Option<&Path>, overrides: Overrides, bins: usize) -> Result<()> {
    let config = load(config, overrides)?;
    let generator = config.generator()?;
    let values: Vec<f64> = generator.take(config.samples).collect();

    let Some(summary) = Summary::from_values(&values) else {
        println!("No samples generated.");
        return Ok(());
    };

    println!("--- Itamaraca PRNG Results ---");
    println!("Samples: {}", summary.count);
    println!("Mean: {:.2}", summary.mean);
    println!("Standard Deviation: {:.2}", summary.std_dev);
    println!("Min: {}", format::format_value(summary.min));
    println!("Max: {}", format::format_value(summary.max));

    let upper = if config.max_value.is_finite() && config.max_value > 0.0 {
        config.max_value
    } else {
        summary.max
    };
    let mut histogram = match Histogram::new(bins, upper) {
        Ok(histogram) => histogram,
        Err(e) => {
            tracing::warn!("Skipping histogram: {}", e);
            return Ok(());
        }
    };
    histogram.extend(values.iter().copied());

    println!("{}", RULE);
    let largest = histogram.largest();
    for (i, &count) in histogram.counts().iter().enumerate() {
        let (lo, hi) = histogram.edges(i);
        println!(
            "{:>10.2} - {:<10.2} {:>6} {}",
            lo,
            hi,
            count,
            format::bar(count, largest, HISTOGRAM_WIDTH)
        );
    }
    if histogram.skipped() > 0 {
        println!("Non-finite values skipped: {}", histogram.skipped());
    }

    Ok(())
}
