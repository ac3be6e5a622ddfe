use thiserror::Error;

/// A form rule that blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min}, got {value}")]
    Min {
        field: &'static str,
        min: i64,
        value: i64,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field } | ValidationError::Min { field, .. } => field,
        }
    }
}
