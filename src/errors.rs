use thiserror::Error;

/// Errors produced by the history-ingestion layer.
///
/// The numerical core (conditioner and evaluator) never returns these: per
/// the standard it emits best-effort numbers for any input. Only file
/// loading can fail.
#[derive(Error, Debug)]
pub enum Gost25645Error {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),
}
