//! Pickup API HTTP transport adapter.
//!
//! Implements the [`pickup_api::HttpTransport`] trait over `reqwest`.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Connection handling, TLS, multipart encoding (including
//! the boundary and its `Content-Type` header) live here. The [`pickup_api`]
//! crate sees only [`pickup_api::HttpTransport`].
//!
//! Responses are returned whatever their status; interpreting them is the
//! client's job. There is no retry and no timeout beyond reqwest's defaults.

use async_trait::async_trait;
use pickup_api::{
    FormData, FormPart, HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestBody,
    TransportError,
};
use reqwest::multipart::{Form, Part};
use tracing::{debug, instrument};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("pickup/", env!("CARGO_PKG_VERSION"));

/// [`HttpTransport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client })
    }

    /// Wraps an existing client, e.g. one configured with a proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip_all, fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(reqwest_method(request.method), &request.url);

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder.body(bytes),
            // reqwest sets `multipart/form-data; boundary=...` itself.
            RequestBody::Multipart(form) => builder.multipart(multipart_form(form)?),
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status_text(status),
            body: body.to_vec(),
        })
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

/// Converts a [`FormData`] into a reqwest multipart form, preserving part order.
fn multipart_form(form: FormData) -> Result<Form, TransportError> {
    let mut multipart = Form::new();

    for part in form.into_parts() {
        multipart = match part {
            FormPart::Text { name, value } => multipart.text(name, value),
            FormPart::File { name, file } => {
                let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(content_type) = file.content_type {
                    part = part.mime_str(&content_type).map_err(transport_error)?;
                }
                multipart.part(name, part)
            }
        };
    }

    Ok(multipart)
}

/// The canonical reason phrase, or the numeric code for statuses without one.
fn status_text(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_string(),
        None => status.as_str().to_string(),
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    TransportError::new(err.to_string())
}
