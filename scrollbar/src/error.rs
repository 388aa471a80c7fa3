use thiserror::Error;

/// Errors raised by [`crate::Scrollbar`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollbarError {
    /// The operation needs geometry from `initialize` first.
    #[error("scrollbar is not initialized (called {operation} before initialize)")]
    NotInitialized { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, ScrollbarError>;
