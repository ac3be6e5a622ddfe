use thiserror::Error;

mod api_error;
mod app_error;
mod validation_error;

pub use api_error::ApiError;
pub use app_error::AppError;
pub use validation_error::ValidationError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_keeps_its_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let detail = source.to_string();

        let error = ApplicationError::from(source);

        assert!(error.to_string().starts_with("JSON error: "));
        assert!(error.to_string().contains(&detail), "got: {}", error);
    }

    #[test]
    fn test_api_error_is_transparent() {
        let error = ApplicationError::from(ApiError::Transport("connection refused".into()));
        assert_eq!(error.to_string(), "Transport error: connection refused");
    }
}
