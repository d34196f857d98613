//! The transport wrapper shared by every resource service.
//!
//! [`ApiClient`] turns a registry path plus [`RequestOptions`] into an
//! [`HttpRequest`], hands it to the injected [`HttpTransport`] exactly once, and
//! either decodes the JSON success body or converts the failure into an
//! [`ApiError`] with a best-effort message.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::errors::resolve_error_message;
use crate::services::{BookingService, OrderService, PricingService, ProductService, UserService};
use crate::transport::{APPLICATION_JSON, CONTENT_TYPE};
use crate::{
    ApiConfig, ApiError, FormData, Headers, HttpMethod, HttpRequest, HttpTransport, RequestBody,
    Resource,
};

/// Prefix for the last-resort message of a failed JSON request.
const API_ERROR_PREFIX: &str = "API Error";

/// Per-call request settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    /// Merged over the default `Content-Type: application/json`.
    pub headers: Headers,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Issues requests against one configured backend.
///
/// Cheap to clone; clones share the same transport.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET` `path` and decode the body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.fetch_json(path, RequestOptions::default()).await
    }

    /// `GET` a registry [`Resource`] and decode the body as `T`.
    ///
    /// The resource's logical name is recorded on the span.
    #[instrument(skip(self, resource), fields(resource = resource.name()))]
    pub async fn get_resource<T: DeserializeOwned>(&self, resource: &Resource) -> Result<T, ApiError> {
        self.get_json(&resource.path()).await
    }

    /// Sends a JSON request to `path` and decodes the JSON response as `T`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] if no response arrived.
    /// - [`ApiError::Status`] for a non-2xx response; the message is the body's
    ///   `error` field, `"Unknown error"` for a non-JSON body, or
    ///   `"API Error: {status text}"`.
    /// - [`ApiError::Decode`] if a 2xx body is not a valid `T`.
    #[instrument(skip(self, options), fields(method = %options.method))]
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let headers = Headers::new()
            .with(CONTENT_TYPE, APPLICATION_JSON)
            .merge(options.headers);

        let body = match options.body {
            Some(value) => {
                let bytes = serde_json::to_vec(&value).map_err(|source| ApiError::Encode {
                    path: path.to_string(),
                    source,
                })?;
                RequestBody::Json(bytes)
            }
            None => RequestBody::Empty,
        };

        let request = HttpRequest {
            method: options.method,
            url: self.config.url(path),
            headers,
            body,
        };

        self.execute(path, request, API_ERROR_PREFIX).await
    }

    /// `POST`s a multipart form to `path` and decodes the JSON response as `T`.
    ///
    /// No `Content-Type` header is set: the transport must generate it together
    /// with the multipart boundary. `fallback_prefix` is used for the
    /// last-resort error message, as in [`ApiClient::fetch_json`].
    #[instrument(skip(self, form))]
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
        fallback_prefix: &str,
    ) -> Result<T, ApiError> {
        let request = HttpRequest {
            method: HttpMethod::Post,
            url: self.config.url(path),
            headers: Headers::new(),
            body: RequestBody::Multipart(form),
        };

        self.execute(path, request, fallback_prefix).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        request: HttpRequest,
        fallback_prefix: &str,
    ) -> Result<T, ApiError> {
        debug!(method = %request.method, url = %request.url, "Sending API request");

        let response = self.transport.send(request).await.map_err(|err| {
            warn!(path, error = %err, "API request did not complete");
            ApiError::from(err)
        })?;

        if !response.is_success() {
            let message = resolve_error_message(&response.body, fallback_prefix, &response.status_text);
            warn!(path, status = response.status, %message, "API request failed");
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        serde_json::from_slice(&response.body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    // -----------------------------------------------------------------------
    // Resource services
    // -----------------------------------------------------------------------

    pub fn orders(&self) -> OrderService {
        OrderService::new(self.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.clone())
    }

    pub fn bookings(&self) -> BookingService {
        BookingService::new(self.clone())
    }

    pub fn products(&self) -> ProductService {
        ProductService::new(self.clone())
    }

    pub fn pricing(&self) -> PricingService {
        PricingService::new(self.clone())
    }
}
