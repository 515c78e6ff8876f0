//! Browser-backed capabilities for the forms
//!
//! - [`FetchTransport`]: sends form requests with `fetch` (gloo-net),
//!   credentials included
//! - [`DocumentCookies`]: reads tokens from `document.cookie`
//! - [`LocationNavigator`]: full-page navigation through `window.location`
//!
//! On the server the same names exist as inert stand-ins so components render
//! during SSR; no request is ever sent from there.

use async_trait::async_trait;

use crate::core::{
    ApiRequest, ApiResponse, CredentialProvider, HttpTransport, Navigator, SubmitError,
};

/// File handle carried by the course form
#[cfg(not(feature = "ssr"))]
pub type FileHandle = web_sys::File;

/// File handle carried by the course form (never constructed on the server)
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, PartialEq)]
pub struct FileHandle;

/// `fetch` transport for form submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

/// Reads credentials from `document.cookie` at call time
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookies;

/// Navigates by assigning `window.location.href`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

/// Build a `FormData` from multipart parts, keeping their order
#[cfg(not(feature = "ssr"))]
fn to_form_data(
    parts: Vec<crate::core::MultipartPart<FileHandle>>,
) -> Result<web_sys::FormData, SubmitError> {
    use crate::core::MultipartPart;

    let form_data = web_sys::FormData::new().map_err(|e| SubmitError::Transport(format!("{:?}", e)))?;
    for part in parts {
        match part {
            MultipartPart::Text { name, value } => form_data.append_with_str(&name, &value),
            MultipartPart::File { name, file } => form_data.append_with_blob(&name, &file),
        }
        .map_err(|e| SubmitError::Transport(format!("{:?}", e)))?;
    }
    Ok(form_data)
}

#[cfg(not(feature = "ssr"))]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    type File = FileHandle;

    async fn post(&self, request: ApiRequest<FileHandle>) -> Result<ApiResponse, SubmitError> {
        use crate::core::RequestBody;
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let mut builder = Request::post(request.path).credentials(RequestCredentials::Include);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        // The browser sets the multipart content type and boundary itself
        let req = match request.body {
            RequestBody::Json(json) => builder.body(json),
            RequestBody::Multipart(parts) => builder.body(to_form_data(parts)?),
        }
        .map_err(SubmitError::transport)?;

        let resp = req.send().await.map_err(SubmitError::transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(SubmitError::transport)?;

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(feature = "ssr")]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    type File = FileHandle;

    async fn post(&self, _request: ApiRequest<FileHandle>) -> Result<ApiResponse, SubmitError> {
        Err(SubmitError::Transport(
            "Requests are only sent from the browser".to_string(),
        ))
    }
}

#[cfg(not(feature = "ssr"))]
impl CredentialProvider for DocumentCookies {
    fn token(&self, name: &str) -> Result<Option<String>, SubmitError> {
        use wasm_bindgen::JsCast;

        let cookies = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|document| document.cookie().ok());

        match cookies {
            Some(cookies) => crate::core::find_cookie(&cookies, name),
            None => Ok(None),
        }
    }
}

#[cfg(feature = "ssr")]
impl CredentialProvider for DocumentCookies {
    fn token(&self, _name: &str) -> Result<Option<String>, SubmitError> {
        Ok(None)
    }
}

#[cfg(not(feature = "ssr"))]
impl Navigator for LocationNavigator {
    fn navigate(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            leptos::logging::warn!("No window to navigate to {}", href);
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            leptos::logging::warn!("Navigation to {} failed: {:?}", href, e);
        }
    }
}

#[cfg(feature = "ssr")]
impl Navigator for LocationNavigator {
    fn navigate(&self, _href: &str) {}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::{RequestBody, http::LOGIN_PATH};

    #[tokio::test]
    async fn test_server_transport_never_sends() {
        let request = ApiRequest::new(LOGIN_PATH, RequestBody::Json("{}".into()));
        let result = FetchTransport.post(request).await;

        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }

    #[test]
    fn test_server_has_no_cookies() {
        assert_eq!(DocumentCookies.token("csrftoken"), Ok(None));
    }
}
