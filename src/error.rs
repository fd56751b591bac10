use thiserror::Error;

#[derive(Error, Debug)]
pub enum CobrancaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{0}' in {1}")]
    MissingColumn(String, String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, CobrancaError>;
