use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardRevealError {
    #[error("No card with id {0}")]
    NotFound(u32),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Malformed roster: {0}")]
    MalformedRoster(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CardRevealError {
    fn from(err: serde_json::Error) -> Self {
        CardRevealError::MalformedRoster(err.to_string())
    }
}

impl From<CardRevealError> for String {
    fn from(err: CardRevealError) -> Self {
        err.to_string()
    }
}
