use thiserror::Error;

/// Errors produced while validating a thickness entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThicknessError {
    #[error("Enter a valid number for the thickness (1 to 20).")]
    NotANumber(String),

    #[error("Thickness must be in the range 1 to 20.")]
    OutOfRange(i64),
}

/// Result type for pen setting operations
pub type PenResult<T> = Result<T, ThicknessError>;
