use thiserror::Error;

/// Convenience result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned by pipeline functions.
///
/// This is a single error enum shared across fetch, load, query, describe and
/// transform. Nothing in this crate catches or translates these: failures
/// propagate to the caller and abort the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// HTTP failure while fetching a remote dataset (connect, timeout, non-2xx status).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Underlying I/O error (e.g. directory cannot be created, file cannot be written).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV header inspection error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Error surfaced from the Polars engine (SQL syntax, unknown columns,
    /// compute failures). Deliberately untranslated.
    #[error("engine error: {0}")]
    Engine(#[from] polars::error::PolarsError),

    /// The input does not conform to the provided schema (missing required
    /// columns, headerless file, nulls in a non-nullable column).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}
