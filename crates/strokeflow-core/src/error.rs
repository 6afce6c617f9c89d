use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid onset time '{input}': {reason}")]
    InvalidOnset { input: String, reason: String },

    #[error("unknown NIHSS item: {0}")]
    UnknownNihssItem(String),
}
