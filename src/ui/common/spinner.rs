use leptos::prelude::*;

/// Small spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "spinner spinner-circle spinner-sm spinner-inline".to_string()
    } else {
        format!("spinner spinner-circle spinner-sm spinner-inline {}", class)
    };

    view! {
        <span class=full_classes role="status" aria-hidden="true">
            <span class="spinner-circle-inner"></span>
        </span>
    }
}

/// Form submit button that disables itself and swaps its label while loading
#[component]
pub fn SubmitButton(
    /// Whether a submission is in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Button text when idle
    text: &'static str,
    /// Button text while loading
    loading_text: &'static str,
    /// Show a spinner next to the loading text
    #[prop(default = false)]
    spinner: bool,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn btn-primary w-100".to_string()
    } else {
        format!("btn btn-primary w-100 {}", class)
    };

    view! {
        <button
            type="submit"
            class=full_classes
            class:opacity-50=move || loading.get()
            disabled=move || loading.get()
        >
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{text}</span> }
            >
                <span class="flex items-center justify-center gap-2">
                    {spinner.then(|| view! { <InlineSpinner class="me-2".to_string() /> })}
                    {loading_text}
                </span>
            </Show>
        </button>
    }
}
