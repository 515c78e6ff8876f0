//! Request/response types and the transport seam between forms and the network
//!
//! Forms build an [`ApiRequest`] from a snapshot of their state and hand it to
//! an [`HttpTransport`]. In the browser the transport is backed by `fetch`
//! (see `ui::browser`); tests use in-memory fakes.

use async_trait::async_trait;

use super::error::SubmitError;

/// Login endpoint
pub const LOGIN_PATH: &str = "/api/auth/login/";

/// Course creation endpoint
pub const COURSES_PATH: &str = "/api/courses/";

/// A single part of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartPart<F> {
    Text { name: String, value: String },
    File { name: String, file: F },
}

impl<F> MultipartPart<F> {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Request body variants used by the forms
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody<F> {
    /// Serialized JSON text
    Json(String),
    /// Parts in append order; repeated names are allowed
    Multipart(Vec<MultipartPart<F>>),
}

/// A POST to a fixed relative path, always sent with credentials included
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest<F> {
    pub path: &'static str,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody<F>,
}

impl<F> ApiRequest<F> {
    pub fn new(path: &'static str, body: RequestBody<F>) -> Self {
        Self {
            path,
            headers: Vec::new(),
            body,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First header value with a case-insensitive name match
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What the forms need from a response: status and raw body text
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx, same as `Response.ok` in the browser
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends form requests. Errors are transport failures only; HTTP error
/// statuses come back as a normal [`ApiResponse`].
#[async_trait(?Send)]
pub trait HttpTransport {
    /// File handle type carried by multipart bodies
    type File;

    async fn post(&self, request: ApiRequest<Self::File>) -> Result<ApiResponse, SubmitError>;
}

/// Full-page navigation
pub trait Navigator {
    fn navigate(&self, href: &str);
}
