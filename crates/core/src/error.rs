/// Domain errors raised while answering a threshold query.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The threshold was missing, not a number, or negative.
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// The dataset could not be read from its source.
    #[error("Student data unavailable: {0}")]
    DataUnavailable(#[from] std::io::Error),

    /// The dataset was read but does not hold a list of student records.
    #[error("Student data malformed: {0}")]
    DataFormat(#[from] serde_json::Error),
}
