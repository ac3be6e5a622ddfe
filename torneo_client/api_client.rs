use reqwest::{Client, RequestBuilder, Response, StatusCode, header::HeaderMap};
use serde::de::DeserializeOwned;

use torneo_app::config::Config;
use torneo_types::{
    common::{Alert, EntityResponse},
    errors::{ApiError, ApplicationError},
};

/// Shared HTTP plumbing for every REST resource of the backend.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    app_name: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApplicationError> {
        let http = Client::builder()
            .user_agent(concat!("torneo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApplicationError::Infrastructure(format!("{:#?}", e)))?;

        Ok(Self::with_client(http, &config.api_url, &config.app_name))
    }

    pub fn with_client(http: Client, base_url: &str, app_name: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_name: app_name.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/{path}`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Sends `request` and turns any non-success status into an `ApiError`.
    ///
    /// `not_found` names the resource and id a 404 refers to; without it a 404
    /// is reported as an unexpected status.
    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        not_found: Option<(&'static str, i64)>,
    ) -> Result<Response, ApplicationError> {
        let request = request
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let method = request.method().to_string();
        let url = request.url().to_string();

        tracing::debug!("{} {}", method, url);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tracing::warn!("{} {} answered {}", method, url, status);

        let error = match (status, not_found) {
            (StatusCode::BAD_REQUEST, _) => match self.header(response.headers(), "error") {
                Some(error_key) => ApiError::BadRequest {
                    entity: self.header(response.headers(), "params").unwrap_or_default(),
                    error_key,
                },
                None => ApiError::UnexpectedStatus {
                    method,
                    url,
                    status: status.as_u16(),
                },
            },
            (StatusCode::NOT_FOUND, Some((resource, id))) => ApiError::NotFound { resource, id },
            _ => ApiError::UnexpectedStatus {
                method,
                url,
                status: status.as_u16(),
            },
        };

        Err(error.into())
    }

    /// Decodes a JSON body and collects the response metadata.
    pub(crate) async fn decode<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<EntityResponse<T>, ApplicationError> {
        let status = response.status().as_u16();
        let alert = self.alert(response.headers());
        let body = response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(EntityResponse::new(status, body).with_alert(alert))
    }

    /// Collects the metadata of a response without a body.
    pub(crate) fn empty(&self, response: Response) -> EntityResponse<()> {
        EntityResponse::new(response.status().as_u16(), ()).with_alert(self.alert(response.headers()))
    }

    pub(crate) fn alert(&self, headers: &HeaderMap) -> Option<Alert> {
        let message = self.header(headers, "alert")?;
        Some(Alert {
            message,
            param: self.header(headers, "params"),
        })
    }

    /// Reads the `X-<app>-<suffix>` header the backend sets on responses.
    fn header(&self, headers: &HeaderMap, suffix: &str) -> Option<String> {
        let name = format!("x-{}-{}", self.app_name, suffix).to_lowercase();
        headers
            .get(name.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }
}
