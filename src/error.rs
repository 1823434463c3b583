//! Errors that end the program before or around a quiz session.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("input closed before the quiz options were collected")]
    InputClosed,
    #[error("question bank request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("question bank rejected the request (response code {0})")]
    ResponseCode(u8),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
