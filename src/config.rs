use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GeneratorError, Result};
use crate::rng::Generator;

pub const DEFAULT_SAMPLES: usize = 10_000;
pub const DEFAULT_MAX_VALUE: f64 = 10_000.0;
pub const DEFAULT_SEEDS: [f64; 3] = [800.0, 25.0, 3005.0];
pub const DEFAULT_LAMBDA: f64 = 1.97;
pub const DEFAULT_OUTPUT: &str = "itamaraca_results.csv";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub samples: usize,
    pub max_value: f64,
    pub seeds: Vec<f64>,
    pub lambda: f64,
    pub output: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            max_value: DEFAULT_MAX_VALUE,
            seeds: DEFAULT_SEEDS.to_vec(),
            lambda: DEFAULT_LAMBDA,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Explicit overrides, usually straight from the command line. `None` keeps
/// whatever the base config already holds.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub samples: Option<usize>,
    pub max_value: Option<f64>,
    pub seeds: Option<Vec<f64>>,
    pub lambda: Option<f64>,
    pub output: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| GeneratorError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)
            .map_err(|e| GeneratorError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Defaults, then the optional file, then the overrides.
    pub fn resolve(file: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let base = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(samples) = overrides.samples {
            self.samples = samples;
        }
        if let Some(max_value) = overrides.max_value {
            self.max_value = max_value;
        }
        if let Some(seeds) = overrides.seeds {
            self.seeds = seeds;
        }
        if let Some(lambda) = overrides.lambda {
            self.lambda = lambda;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        self
    }

    pub fn generator(&self) -> Result<Generator> {
        Generator::new(self.max_value, &self.seeds, self.lambda)
    }
}
