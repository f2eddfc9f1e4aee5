use thiserror::Error;

/// Errors raised while configuring or running the benchmark matrix.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Writing the result table failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A step multiplier of zero never advances either pointer, and the fast
    /// pointer's step must fit in a `usize`.
    #[error("step multiplier must be at least 1 and at most usize::MAX / 2, got {0}")]
    InvalidStepK(usize),

    /// One axis of the benchmark matrix has no values.
    #[error("benchmark matrix has no {0}")]
    EmptyMatrix(&'static str),

    #[error("iteration counts must be at least 1")]
    ZeroIterations,

    #[error("unknown cycle scenario: {0:?}")]
    UnknownScenario(String),
}

pub type BenchResult<T> = Result<T, BenchError>;
