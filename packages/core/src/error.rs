use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("Config directory unavailable")]
    NoConfigDir,
}

pub type CueResult<T> = Result<T, CueError>;
