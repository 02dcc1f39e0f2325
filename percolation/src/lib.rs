#![forbid(unsafe_code)]

use thiserror::Error;

mod model;
mod stats;

pub use model::Percolation;
pub use stats::PercolationStats;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("grid dimension must be at least 1")]
    InvalidSize,
    #[error("trial count must be at least 1")]
    InvalidTrials,
    #[error("site ({row}, {col}) is out of bounds for a {size}x{size} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
