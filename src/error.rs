use thiserror::Error;

pub type Result<T> = std::result::Result<T, BotError>;

/// Every failure a cycle can raise.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("{operation} failed: {message}")]
    Backend { operation: String, message: String },

    #[error("Invalid channel ID: {0}")]
    PeerIdInvalid(String),

    #[error("Channel ID not found: {0}")]
    IdNotFound(String),

    #[error("Identity error: {0}")]
    Identity(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BotError {
    /// Turns a collaborator's free-form failure text into a typed error.
    ///
    /// This is the only place message text is inspected; everything past it
    /// branches on the variant.
    pub fn from_message(operation: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("Peer id invalid") {
            BotError::PeerIdInvalid(message)
        } else if message.contains("ID not found") {
            BotError::IdNotFound(message)
        } else {
            BotError::Backend {
                operation: operation.to_string(),
                message,
            }
        }
    }
}

impl From<toml::de::Error> for BotError {
    fn from(e: toml::de::Error) -> Self {
        BotError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for BotError {
    fn from(e: toml::ser::Error) -> Self {
        BotError::Config(e.to_string())
    }
}
