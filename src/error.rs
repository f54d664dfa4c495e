use thiserror::Error;

/// Failures of the host's outer surfaces. Layout itself never fails.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid region '{0}': expected x,y,width,height")]
    InvalidRegion(String),
}
