use thiserror::Error;

pub type Result<T> = std::result::Result<T, CelebSignalError>;

#[derive(Error, Debug)]
pub enum CelebSignalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl CelebSignalError {
    /// Short stable name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CelebSignalError::Config(_) => "config",
            CelebSignalError::Fetch(_) => "fetch",
            CelebSignalError::Parse(_) => "parse",
            CelebSignalError::Storage(_) => "storage",
            CelebSignalError::Export(_) => "export",
        }
    }
}
