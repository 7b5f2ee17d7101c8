use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("level value out of range: {0}")]
    InvalidLevel(i64),
    #[error("level rank out of range: {0}")]
    InvalidRank(usize),
    #[error("unknown level: {0}")]
    UnknownLevel(String),
}
