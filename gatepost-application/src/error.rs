use gatepost_domain::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load dashboard data: {0}")]
    Fetch(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to update guard assignments: {0}")]
    AssignmentUpdate(String),
    #[error("failed to update station: {0}")]
    StationUpdate(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
