use serde::{Serialize, de::DeserializeOwned};

/// Anything carrying an optional, backend-assigned identifier.
/// `None` means the record was never persisted.
pub trait Identifiable {
    fn identifier(&self) -> Option<i64>;
}

/// A record exposed by the REST backend as `/api/{RESOURCE}`.
pub trait Entity:
    Identifiable + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Name used by the backend in alerts and error headers.
    const NAME: &'static str;
    /// Path segment of the collection resource.
    const RESOURCE: &'static str;
}

/// Message the backend attaches to mutations via `X-<app>-alert` and `X-<app>-params`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub param: Option<String>,
}

/// A successful response together with its HTTP metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityResponse<T> {
    pub status: u16,
    pub body: T,
    pub alert: Option<Alert>,
}

impl<T> EntityResponse<T> {
    pub fn new(status: u16, body: T) -> Self {
        Self {
            status,
            body,
            alert: None,
        }
    }

    pub fn with_alert(mut self, alert: Option<Alert>) -> Self {
        self.alert = alert;
        self
    }
}
