use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),
}
