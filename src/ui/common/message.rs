//! Status message block shown above a form

use crate::core::SubmissionStatus;
use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Renders the current submission status.
///
/// Error and success get their own styling; nothing at all is rendered while
/// the status carries no message.
#[component]
pub fn StatusMessage(
    /// Status signal
    #[prop(into)]
    status: Signal<SubmissionStatus>,
) -> impl IntoView {
    let has_message = move || status.with(|s| s.message().is_some());

    view! {
        <Show when=has_message>
            {move || {
                let current = status.get();
                let (class, icon) = if current.is_error() {
                    ("alert alert-danger error-message", icons::ALERT_CIRCLE)
                } else {
                    ("alert alert-success success-message", icons::CHECK)
                };
                let text = current.message().unwrap_or_default().to_string();

                view! {
                    <div class=class role="alert">
                        <Icon name=icon class="icon-text"/>
                        <span>{text}</span>
                    </div>
                }
            }}
        </Show>
    }
}
