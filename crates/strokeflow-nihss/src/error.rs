use thiserror::Error;

#[derive(Debug, Error)]
pub enum NihssError {
    #[error("invalid NIHSS field: {field}")]
    InvalidField { field: String },
}
