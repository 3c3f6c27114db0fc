//! Summary statistics and a fixed-width histogram for inspecting a generated
//! run. These describe a sequence; they do not assert anything about its
//! quality.

use crate::error::{GeneratorError, Result};

pub const DEFAULT_BINS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    upper: f64,
    counts: Vec<usize>,
    skipped: usize,
}

impl Histogram {
    /// Equal-width bins over `[0, upper]`. Values past `upper` land in the
    /// last bin, values below zero in the first.
    pub fn new(bins: usize, upper: f64) -> Result<Self> {
        if bins == 0 {
            return Err(GeneratorError::InvalidArgument(
                "Histogram needs at least one bin".to_string(),
            ));
        }
        if !(upper.is_finite() && upper > 0.0) {
            return Err(GeneratorError::InvalidArgument(format!(
                "Histogram upper bound must be positive and finite, got {}",
                upper
            )));
        }

        Ok(Self {
            upper,
            counts: vec![0; bins],
            skipped: 0,
        })
    }

    pub fn add(&mut self, value: f64) {
        if !value.is_finite() {
            self.skipped += 1;
            return;
        }

        let bins = self.counts.len();
        let slot = ((value / self.upper) * bins as f64).floor().max(0.0) as usize;
        self.counts[slot.min(bins - 1)] += 1;
    }

    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn bin_width(&self) -> f64 {
        self.upper / self.counts.len() as f64
    }

    /// `(lower, upper)` edges of bin `index`.
    pub fn edges(&self, index: usize) -> (f64, f64) {
        let width = self.bin_width();
        (index as f64 * width, (index + 1) as f64 * width)
    }

    pub fn largest(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
