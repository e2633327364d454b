use std::fmt;
use thiserror::Error;

/// State of the single edit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Closed => f.write_str("closed"),
            SessionState::Open => f.write_str("open"),
        }
    }
}

/// Errors raised when an operation is invoked outside its valid state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid session state: cannot {operation} while {state}")]
    InvalidSessionState {
        operation: &'static str,
        state: SessionState,
    },
}
