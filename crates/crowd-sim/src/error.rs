use crowd_core::CrowdError;
use crowd_field::FieldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("start list length {starts} does not match goal list length {goals}")]
    StartGoalMismatch { starts: usize, goals: usize },

    #[error(transparent)]
    Core(#[from] CrowdError),

    #[error(transparent)]
    Field(#[from] FieldError),
}

pub type SimResult<T> = Result<T, SimError>;
