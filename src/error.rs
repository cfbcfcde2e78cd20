use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    #[error("Project not found for repository: {0}")]
    ProjectNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
