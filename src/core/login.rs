//! Login form state and submission
//!
//! Credentials are posted as JSON together with the CSRF token read from the
//! `csrftoken` cookie. On success the whole page navigates to `/`.

use serde::{Deserialize, Serialize};

use super::cookie::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME, CredentialProvider};
use super::error::SubmitError;
use super::http::{ApiRequest, ApiResponse, HttpTransport, LOGIN_PATH, Navigator, RequestBody};
use super::status::SubmissionStatus;
use super::submission::{Liveness, SubmissionOutcome, SubmissionView, run_submission};

/// Fallback message when a rejection carries no `error` field
pub const LOGIN_FAILED: &str = "Login failed";

/// Shown between a successful login and the page navigation
pub const LOGIN_SUCCEEDED: &str = "Login successful! Redirecting...";

/// Where the browser goes after logging in
pub const AFTER_LOGIN_HREF: &str = "/";

/// Login form state. Serializes to the request body as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Generic input handler keyed by the control's `name`.
    ///
    /// Returns `false` for names that are not login fields.
    pub fn apply_change(&mut self, name: &str, value: String) -> bool {
        match name {
            "username" => self.username = value,
            "password" => self.password = value,
            _ => return false,
        }
        true
    }

    /// Build the login request, reading the CSRF token at call time.
    ///
    /// A missing token leaves the header out; an unreadable one fails the
    /// attempt before anything is sent.
    pub fn to_request<F>(
        &self,
        credentials: &impl CredentialProvider,
    ) -> Result<ApiRequest<F>, SubmitError> {
        let body = serde_json::to_string(self).map_err(SubmitError::transport)?;
        let mut request = ApiRequest::new(LOGIN_PATH, RequestBody::Json(body))
            .header("Content-Type", "application/json");

        if let Some(token) = credentials.token(CSRF_COOKIE_NAME)? {
            request = request.header(CSRF_HEADER_NAME, token);
        }

        Ok(request)
    }
}

/// Error body returned by the auth API
#[derive(Debug, Deserialize)]
struct LoginErrorBody {
    error: Option<String>,
}

/// Turn a login response into success or a user-facing error.
///
/// The body is parsed as JSON before the status is looked at, so a non-JSON
/// body is a decode error whatever the status.
pub fn interpret_login_response(response: &ApiResponse) -> Result<(), SubmitError> {
    let data: serde_json::Value =
        serde_json::from_str(&response.body).map_err(SubmitError::decode)?;

    if response.ok() {
        return Ok(());
    }

    let message = serde_json::from_value::<LoginErrorBody>(data)
        .ok()
        .and_then(|body| body.error)
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| LOGIN_FAILED.to_string());

    Err(SubmitError::Rejected(message))
}

/// Drives one login form: request construction, sending and navigation
pub struct LoginController<T, C, N> {
    transport: T,
    credentials: C,
    navigator: N,
}

impl<T, C, N> LoginController<T, C, N>
where
    T: HttpTransport,
    C: CredentialProvider,
    N: Navigator,
{
    pub fn new(transport: T, credentials: C, navigator: N) -> Self {
        Self {
            transport,
            credentials,
            navigator,
        }
    }

    /// Submit a snapshot of the form.
    ///
    /// Later edits to the live form do not affect this request.
    pub async fn submit<V>(&self, view: &V, liveness: &Liveness, form: LoginForm) -> SubmissionOutcome
    where
        V: SubmissionView + ?Sized,
    {
        let attempt = async {
            let request = form.to_request(&self.credentials)?;
            let response = self.transport.post(request).await?;
            interpret_login_response(&response)
        };

        run_submission(view, liveness, attempt, |()| {
            view.set_status(SubmissionStatus::success(LOGIN_SUCCEEDED));
            self.navigator.navigate(AFTER_LOGIN_HREF);
        })
        .await
    }
}
