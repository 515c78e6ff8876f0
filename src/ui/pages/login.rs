//! Login page component
//!
//! Hosts the login form. A server-side redirect can hand over an error with
//! `/login?error=...`; it becomes the form's initial status.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use super::layout::PageLayout;
use crate::core::SubmissionStatus;
use crate::ui::auth::LoginForm;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let errors = query.with_untracked(|q| q.get_all("error").unwrap_or_default());
    let initial_status = SubmissionStatus::from_errors(errors);

    view! {
        <Title text="Login - Kursy Online"/>
        <PageLayout>
            <div class="row justify-content-center">
                <div class="col-md-6 col-lg-4">
                    <LoginForm initial_status=initial_status />
                </div>
            </div>
        </PageLayout>
    }
}
