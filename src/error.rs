use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("node is not an element instance (found {found} node)")]
    InvalidNodeType { found: &'static str },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
