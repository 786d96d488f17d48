//! Error types for the process engine

use crate::{StateName, TransitionName};

/// Errors that can occur in process definition and query operations
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Process not found: {0}")]
    UnknownProcess(String),

    #[error("Process already registered: {0}")]
    DuplicateProcess(String),

    #[error("Transition not found in process '{process}': {transition}")]
    UnknownTransition {
        process: String,
        transition: TransitionName,
    },

    #[error("State not found: {0}")]
    UnknownState(StateName),

    #[error("Duplicate transition name: {0}")]
    DuplicateTransition(TransitionName),

    #[error("Duplicate state name: {0}")]
    DuplicateState(StateName),

    #[error("Process has no initial transition")]
    NoInitialTransition,

    #[error("Process validation error: {0}")]
    ValidationError(String),
}

/// Result type alias for process operations
pub type ProcessResult<T> = Result<T, ProcessError>;
