use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("API request failed with status {0}")]
    ApiStatus(u16),

    #[error("API response contained no message content")]
    MissingContent,

    #[error("CoachError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for CoachError {
    fn from(error: std::io::Error) -> Self {
        CoachError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for CoachError {
    fn from(error: reqwest::Error) -> Self {
        CoachError::Reqwest(Box::new(error))
    }
}
