use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to build HTTP client: {0}")]
    ClientError(#[from] reqwest::Error),

    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
