use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Assistant error: {0}")]
    Assistant(String),
    #[error("Invalid assistant response: {0}")]
    InvalidResponse(String),
    #[error("Store error: {0}")]
    Store(String),
}

pub type FlowResult<T> = Result<T, FlowError>;
