use thiserror::Error;

/// Failures that abort an entire import run. Per-row problems are
/// collected in [`crate::ImportSummary::errors`] instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read import file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),
}

pub type Result<T> = std::result::Result<T, ImportError>;
