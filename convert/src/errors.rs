use coordinate_systems::ConversionErrors;
use rotations::MatrixErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertErrors {
    #[error("{0}")]
    Conversion(#[from] ConversionErrors),
    #[error("{0}")]
    Matrix(#[from] MatrixErrors),
    #[error("could not read batch file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse batch file: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("expected {expected} values, got {got}")]
    WrongValueCount { expected: usize, got: usize },
    #[error("{failures} of {total} batch jobs failed")]
    BatchFailed { failures: usize, total: usize },
}
