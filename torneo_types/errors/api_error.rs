use thiserror::Error;

/// Errors returned by the REST backend or raised while talking to it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 carrying the backend's error key (`error.idexists`, `error.idnull`, ...).
    #[error("Bad request for {entity}: {error_key}")]
    BadRequest { entity: String, error_key: String },

    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("Unexpected status {status} from {method} {url}")]
    UnexpectedStatus {
        method: String,
        url: String,
        status: u16,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unable to decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest { .. } => Some(400),
            ApiError::NotFound { .. } => Some(404),
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }
}
