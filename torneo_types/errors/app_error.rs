use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("A {0} without an identifier cannot be updated")]
    MissingIdentifier(&'static str),
}
