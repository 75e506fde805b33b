use serde_json::Value;
use thiserror::Error;

use crate::models::FailureDetails;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("FIXIE_URL environment variable not set")]
    MissingProxyUrl,

    #[error("Invalid URL: {0}")]
    InvalidProxyUrl(#[from] url::ParseError),

    #[error("Invalid URL: proxy URL has no host")]
    MissingProxyHost,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Upstream { status: u16, data: Value },
}

impl AppError {
    /// Detail block for the failure body. Only an upstream response carries data.
    pub fn failure_details(&self) -> FailureDetails {
        match self {
            AppError::Upstream { status, data } => FailureDetails::Response {
                status: *status,
                data: data.clone(),
            },
            _ => FailureDetails::no_response(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
