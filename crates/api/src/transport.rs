//! The HTTP transport port.
//!
//! [`HttpTransport`] is the only way this crate reaches the network. The
//! `pickup-transport` crate implements it over `reqwest`; tests substitute a
//! mock. Requests and responses are plain values so that every decision about
//! headers, bodies and error messages is made (and testable) in this crate.

use async_trait::async_trait;

use crate::{PhotoAttachment, TransportError};

/// `Content-Type` header name, lower-case.
pub const CONTENT_TYPE: &str = "content-type";

/// Media type attached to every JSON request by default.
pub const APPLICATION_JSON: &str = "application/json";

// ---------------------------------------------------------------------------
// Method
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// An ordered header list with case-insensitive, last-write-wins names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any existing header of the same name
    /// regardless of case.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some(existing) => *existing = (name, value),
            None => self.0.push((name, value)),
        }
    }

    /// Builder form of [`Headers::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Applies every header in `overrides` on top of `self`.
    pub fn merge(mut self, overrides: Headers) -> Self {
        for (name, value) in overrides.0 {
            self.insert(name, value);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Bodies
// ---------------------------------------------------------------------------

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: PhotoAttachment },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// A multipart form body, in submission order.
///
/// The boundary is chosen by the transport; no content-type is stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    parts: Vec<FormPart>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn append_file(&mut self, name: impl Into<String>, file: PhotoAttachment) {
        self.parts.push(FormPart::File {
            name: name.into(),
            file,
        });
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Consumes the form, yielding its parts in submission order.
    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    /// Field names in submission order.
    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(FormPart::name).collect()
    }

    /// Returns the value of the first text field called `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Returns the first file field called `name`.
    pub fn file(&self, name: &str) -> Option<&PhotoAttachment> {
        self.parts.iter().find_map(|part| match part {
            FormPart::File { name: n, file } if n == name => Some(file),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Pre-encoded JSON bytes.
    Json(Vec<u8>),
    Multipart(FormData),
}

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// A fully resolved request: absolute URL, final headers, encoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: RequestBody,
}

/// A raw response; the body is left undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Canonical reason phrase, e.g. `"Not Found"`. May be empty.
    pub status_text: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// `true` for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// Sends a single HTTP request and returns whatever response arrives.
///
/// Implementations must not retry, cache, or interpret status codes: a 4xx or
/// 5xx response is a successful `send`. `Err` is reserved for requests that
/// produced no response at all.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
