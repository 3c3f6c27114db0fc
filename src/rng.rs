//! Itamaraca moving-window generator.
//!
//! Each step takes the absolute spread between the newest and oldest value of a
//! three-slot window, scales it by `lambda`, reflects it around `max_value` and
//! pushes the result into the window. Not suitable for anything security
//! related.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{GeneratorError, Result};

pub const SEED_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Generator {
    seeds: [f64; SEED_COUNT],
    max_value: f64,
    lambda: f64,
}

impl Generator {
    /// Builds a generator from a caller supplied seed slice.
    ///
    /// Fails with [`GeneratorError::InvalidArgument`] unless exactly three
    /// seeds are given. `max_value` and `lambda` are taken as-is.
    pub fn new(max_value: f64, initial_seeds: &[f64], lambda: f64) -> Result<Self> {
        let seeds: [f64; SEED_COUNT] = initial_seeds.try_into().map_err(|_| {
            GeneratorError::InvalidArgument("Exactly 3 seeds are required".to_string())
        })?;

        Ok(Self::from_seeds(max_value, seeds, lambda))
    }

    pub fn from_seeds(max_value: f64, seeds: [f64; SEED_COUNT], lambda: f64) -> Self {
        Self {
            seeds,
            max_value,
            lambda,
        }
    }

    pub fn next_value(&mut self) -> f64 {
        let [s0, s1, s2] = self.seeds;

        let pn = (s2 - s0).abs();
        let result = (self.max_value - pn * self.lambda).abs();

        self.seeds = [s1, s2, result];
        result
    }

    /// Current window, oldest first.
    pub fn seeds(&self) -> [f64; SEED_COUNT] {
        self.seeds
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Iterator for Generator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// A generator that can be handed to several threads. Every call takes the
/// lock for the whole read-compute-slide step.
#[derive(Debug, Clone)]
pub struct SharedGenerator {
    inner: Arc<Mutex<Generator>>,
}

impl SharedGenerator {
    pub fn new(generator: Generator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    pub fn next_value(&self) -> f64 {
        self.inner.lock().next_value()
    }

    pub fn snapshot(&self) -> Generator {
        self.inner.lock().clone()
    }
}

impl From<Generator> for SharedGenerator {
    fn from(generator: Generator) -> Self {
        Self::new(generator)
    }
}
