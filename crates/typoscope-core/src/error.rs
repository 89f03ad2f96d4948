use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpellCheckError {
    #[error("engine error: {0}")]
    Engine(String),

    #[error("engine response was malformed: {0}")]
    MalformedResponse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpellCheckError>;
