use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unreadable batch input: {0}")]
    UnreadableInput(String),
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;
