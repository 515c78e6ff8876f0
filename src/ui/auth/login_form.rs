//! Login form component
//!
//! Posts the credentials as JSON with the CSRF token from the cookie store and
//! sends the browser to `/` on success.

use std::sync::Arc;

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    CredentialProvider, FieldInput, LoginController, LoginForm as LoginFields, SubmissionStatus,
};
use crate::ui::browser::{DocumentCookies, FetchTransport, LocationNavigator};
use crate::ui::common::{FormField, StatusMessage, SubmitButton};
use crate::ui::form_signals::FormSignals;

/// Shared credential source handed to the form
pub type SharedCredentials = Arc<dyn CredentialProvider + Send + Sync>;

/// Login form component
#[component]
pub fn LoginForm(
    /// Status to show before any submission (e.g. a server-side login error)
    #[prop(optional)]
    initial_status: SubmissionStatus,
    /// Where the CSRF token is read from; defaults to the document cookies
    #[prop(optional)]
    credentials: Option<SharedCredentials>,
) -> impl IntoView {
    let credentials: SharedCredentials = credentials.unwrap_or_else(|| Arc::new(DocumentCookies));

    let form = RwSignal::new(LoginFields::default());
    let signals = FormSignals::new(initial_status);
    let loading = signals.loading;
    let status = signals.status;

    let on_change = Callback::new(move |(name, input): (&'static str, FieldInput)| {
        let FieldInput::Text(value) = input else {
            warn!("Login field {} expects text input", name);
            return;
        };
        let mut applied = false;
        form.update(|f| applied = f.apply_change(name, value));
        if !applied {
            warn!("Ignoring change for unknown login field {}", name);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let signals = signals.clone();
        let credentials = credentials.clone();
        let snapshot = form.get_untracked();

        spawn_local(async move {
            let controller = LoginController::new(FetchTransport, credentials, LocationNavigator);
            let outcome = controller.submit(&signals, &signals.liveness, snapshot).await;
            log!("Login attempt {}", outcome);
        });
    };

    view! {
        <div class="card shadow w-full max-w-md mx-auto">
            <div class="card-body p-4">
                <h2 class="card-title text-center mb-4">"Login"</h2>

                <StatusMessage status=status />

                <form on:submit=on_submit>
                    <FormField
                        label="Username"
                        name="username"
                        value=Signal::derive(move || form.with(|f| f.username.clone()))
                        on_change=on_change
                        required=true
                        autocomplete="username"
                    />

                    <FormField
                        label="Password"
                        name="password"
                        input_type="password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_change=on_change
                        required=true
                        autocomplete="current-password"
                    />

                    <div class="mb-3 text-end">
                        <a href="/reset-password/" class="text-decoration-none">
                            "Forgot your password?"
                        </a>
                    </div>

                    <SubmitButton
                        loading=loading
                        text="Sign in"
                        loading_text="Signing in..."
                        spinner=true
                    />
                </form>

                <div class="text-center mt-4">
                    <p class="mb-0">
                        "Don't have an account? "
                        <a href="/register/" class="text-decoration-none">"Sign up"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
