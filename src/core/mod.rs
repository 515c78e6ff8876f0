//! Platform-independent form logic: state, request construction and the
//! submission state machine shared by the login and course forms.

pub mod cookie;
pub mod course;
pub mod error;
pub mod http;
pub mod login;
pub mod status;
pub mod submission;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod proxy;

pub use cookie::{CookieJar, CredentialProvider, find_cookie};
pub use course::{CourseController, CourseForm, CourseFormView, CourseLevel, FieldInput, Technology};
pub use error::SubmitError;
pub use http::{ApiRequest, ApiResponse, HttpTransport, MultipartPart, Navigator, RequestBody};
pub use login::{LoginController, LoginForm};
pub use status::SubmissionStatus;
pub use submission::{Liveness, SubmissionOutcome, SubmissionView, run_submission};
