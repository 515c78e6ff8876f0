//! Idle/submitting state machine shared by every form
//!
//! [`run_submission`] owns the loading flag for the duration of one attempt:
//! it refuses re-entrant submits, resets the previous status, awaits the
//! request, publishes the outcome and clears the flag on every exit path.
//! A [`Liveness`] token lets an unmounted component drop a late response.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::SubmitError;
use super::status::SubmissionStatus;

/// Where a form publishes its loading flag and status
pub trait SubmissionView {
    fn is_loading(&self) -> bool;
    fn set_loading(&self, loading: bool);
    fn set_status(&self, status: SubmissionStatus);
}

/// Shared flag cleared when the owning component goes away
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the owner as gone. Idempotent.
    pub fn kill(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// How a call to [`run_submission`] ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Another submission was already in flight; nothing happened
    Refused,
    /// The owner went away before the request settled; nothing was published
    Abandoned,
    Succeeded,
    Failed(SubmitError),
}

/// Short log line for an attempt. Carries no form data.
impl std::fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Refused => write!(f, "refused, already in flight"),
            Self::Abandoned => write!(f, "abandoned, form unmounted"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Run one submission attempt against `view`.
///
/// `on_success` runs before the loading flag is cleared, so it can publish a
/// success status, reset state or navigate.
pub async fn run_submission<V, T, Fut, S>(
    view: &V,
    liveness: &Liveness,
    attempt: Fut,
    on_success: S,
) -> SubmissionOutcome
where
    V: SubmissionView + ?Sized,
    Fut: Future<Output = Result<T, SubmitError>>,
    S: FnOnce(T),
{
    if view.is_loading() {
        return SubmissionOutcome::Refused;
    }

    view.set_loading(true);
    view.set_status(SubmissionStatus::Idle);

    let result = attempt.await;

    if !liveness.is_alive() {
        return SubmissionOutcome::Abandoned;
    }

    let outcome = match result {
        Ok(value) => {
            on_success(value);
            SubmissionOutcome::Succeeded
        }
        Err(err) => {
            view.set_status(SubmissionStatus::from(err.clone()));
            SubmissionOutcome::Failed(err)
        }
    };

    view.set_loading(false);
    outcome
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory fakes shared by the form controller tests

    use std::cell::RefCell;

    use async_trait::async_trait;

    use super::*;
    use crate::core::http::{ApiRequest, ApiResponse, HttpTransport, Navigator};

    /// Records every loading/status change in order
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub loading: RefCell<bool>,
        pub status: RefCell<SubmissionStatus>,
        pub loading_history: RefCell<Vec<bool>>,
        pub resets: RefCell<usize>,
    }

    impl SubmissionView for RecordingView {
        fn is_loading(&self) -> bool {
            *self.loading.borrow()
        }

        fn set_loading(&self, loading: bool) {
            *self.loading.borrow_mut() = loading;
            self.loading_history.borrow_mut().push(loading);
        }

        fn set_status(&self, status: SubmissionStatus) {
            *self.status.borrow_mut() = status;
        }
    }

    /// Answers every request with a canned result and keeps what it was sent
    pub struct FakeTransport<F> {
        pub response: Result<ApiResponse, SubmitError>,
        pub sent: RefCell<Vec<ApiRequest<F>>>,
        /// Observed loading flag at send time
        pub loading_seen: RefCell<Vec<bool>>,
        pub view: Option<std::rc::Rc<RecordingView>>,
    }

    impl<F> FakeTransport<F> {
        pub fn responding(status: u16, body: &str) -> Self {
            Self {
                response: Ok(ApiResponse::new(status, body)),
                sent: RefCell::new(Vec::new()),
                loading_seen: RefCell::new(Vec::new()),
                view: None,
            }
        }

        pub fn failing(err: SubmitError) -> Self {
            Self {
                response: Err(err),
                sent: RefCell::new(Vec::new()),
                loading_seen: RefCell::new(Vec::new()),
                view: None,
            }
        }

        pub fn watching(mut self, view: std::rc::Rc<RecordingView>) -> Self {
            self.view = Some(view);
            self
        }
    }

    #[async_trait(?Send)]
    impl<F> HttpTransport for FakeTransport<F> {
        type File = F;

        async fn post(&self, request: ApiRequest<F>) -> Result<ApiResponse, SubmitError> {
            if let Some(view) = &self.view {
                self.loading_seen.borrow_mut().push(view.is_loading());
            }
            self.sent.borrow_mut().push(request);
            self.response.clone()
        }
    }

    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        pub visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, href: &str) {
            self.visited.borrow_mut().push(href.to_string());
        }
    }
}
