use rand::{distributions::Uniform, prelude::Distribution};

use crate::{Error, Percolation, Result};

////////////////////////////////////////////////////////////////////////////////

// z-score of the two-sided 95% confidence interval
const CONFIDENCE_95: f64 = 1.96;

/// Aggregated results of repeated percolation experiments: each trial
/// opens uniformly random sites of a fresh n-by-n grid until the system
/// percolates and records the fraction of sites that ended up open.
pub struct PercolationStats {
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Runs `trials` independent experiments on an n-by-n grid.
    ///
    /// # Arguments
    ///
    /// * `n` - grid dimension, must be at least 1.
    /// * `trials` - number of experiments, must be at least 1.
    pub fn run(n: usize, trials: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        if trials == 0 {
            return Err(Error::InvalidTrials);
        }

        let coords = Uniform::from(1..=n);
        let mut rng = rand::thread_rng();
        let mut thresholds = Vec::with_capacity(trials);

        for _ in 0..trials {
            let mut trial = Percolation::new(n)?;
            while !trial.percolates() {
                let row = coords.sample(&mut rng);
                let col = coords.sample(&mut rng);
                trial.open(row, col)?;
            }
            thresholds.push(trial.number_of_open_sites() as f64 / (n * n) as f64);
        }

        Ok(Self { thresholds })
    }

    /// Per-trial estimates of the percolation threshold.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the per-trial estimates.
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.thresholds.len() as f64
    }

    /// Sample standard deviation of the per-trial estimates. NaN when
    /// fewer than two trials were run.
    pub fn stddev(&self) -> f64 {
        let trials = self.thresholds.len();
        if trials < 2 {
            return f64::NAN;
        }

        let mean = self.mean();
        let variance = self
            .thresholds
            .iter()
            .map(|threshold| (threshold - mean) * (threshold - mean))
            .sum::<f64>()
            / (trials - 1) as f64;
        variance.sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        let trials = self.thresholds.len() as f64;
        self.mean() - CONFIDENCE_95 * self.stddev() / trials.sqrt()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        let trials = self.thresholds.len() as f64;
        self.mean() + CONFIDENCE_95 * self.stddev() / trials.sqrt()
    }
}
