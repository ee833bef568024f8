//! Centralized error types for the inventory.

use thiserror::Error;

/// Main error type for inventory operations.
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Only PDF files are allowed, got '{0}'")]
    InvalidDrawing(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    #[error("Machine '{name}' at site '{site}' not found")]
    MachineNotFound { name: String, site: String },

    #[error("Machine or Part not found. Ensure Machine name '{machine}' and Part number '{part}' are correct.")]
    LinkTargetNotFound { machine: String, part: String },

    #[error("Drawing not found on server: {0}")]
    DrawingNotFound(String),

    #[error("Failed to persist {0} in database")]
    Persistence(String),

    #[error("Drawing storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Coarse classification used by outer layers to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadInput,
    NotFound,
    Internal,
}

impl InventoryError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDrawing(_) | Self::Validation(_) => ErrorKind::BadInput,
            Self::PartNotFound(_)
            | Self::MachineNotFound { .. }
            | Self::LinkTargetNotFound { .. }
            | Self::DrawingNotFound(_) => ErrorKind::NotFound,
            Self::Persistence(_) | Self::Io(_) | Self::Store(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(InventoryError::InvalidDrawing("a.png".into()).kind(), ErrorKind::BadInput);
        assert_eq!(InventoryError::PartNotFound("P-1".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            InventoryError::LinkTargetNotFound { machine: "Lathe".into(), part: "P-1".into() }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(InventoryError::Persistence("part".into()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_store_error_keeps_message() {
        let err: InventoryError = anyhow::anyhow!("bolt connection reset").into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.to_string(), "bolt connection reset");
    }
}
