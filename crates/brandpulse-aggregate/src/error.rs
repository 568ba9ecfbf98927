use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("top-k hashtag count must be at least 1, got {0}")]
    InvalidTopK(usize),
}
