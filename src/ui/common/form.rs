//! Form controls bound to a single change handler
//!
//! Each control reports `(name, input)` to one [`FieldHandler`], so a form
//! updates its state with one generic handler keyed by the control name.

use crate::core::FieldInput;
use crate::ui::browser::FileHandle;
use leptos::prelude::*;

/// Change handler shared by all controls of a form
pub type FieldHandler = Callback<(&'static str, FieldInput)>;

/// Text-like input (text, password, number) with a label
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Control name, passed to the change handler
    name: &'static str,
    /// Input type (text, password, number, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change handler
    on_change: FieldHandler,
    /// Native `required` constraint
    #[prop(default = false)]
    required: bool,
    /// Native `min` constraint for numeric inputs
    #[prop(optional)]
    min: Option<&'static str>,
    /// Native `step` constraint for numeric inputs
    #[prop(optional)]
    step: Option<&'static str>,
    /// Autocomplete hint
    #[prop(optional)]
    autocomplete: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-3 space-y-2">
            <label for=name class="form-label block text-sm font-medium">{label}</label>
            <input
                type=input_type
                id=name
                name=name
                class="form-control w-100"
                required=required
                min=min
                step=step
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_change.run((name, FieldInput::Text(event_target_value(&ev))))
            />
        </div>
    }
}

/// Text area with a label
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Control name, passed to the change handler
    name: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change handler
    on_change: FieldHandler,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Native `required` constraint
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="mb-3 space-y-2">
            <label for=name class="form-label block text-sm font-medium">{label}</label>
            <textarea
                id=name
                name=name
                class="form-control w-100"
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_change.run((name, FieldInput::Text(event_target_value(&ev))))
            />
        </div>
    }
}

/// Single-choice select with a label
#[component]
pub fn SelectField(
    /// Field label text
    label: &'static str,
    /// Control name, passed to the change handler
    name: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change handler
    on_change: FieldHandler,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    /// Native `required` constraint
    #[prop(default = false)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="mb-3 space-y-2">
            <label for=name class="form-label block text-sm font-medium">{label}</label>
            <select
                id=name
                name=name
                class="form-control w-100"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run((name, FieldInput::Text(event_target_value(&ev))))
            >
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val selected=move || value.get() == val>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Read `(value, selected)` for every option of the select that fired `ev`
#[cfg(not(feature = "ssr"))]
fn scan_options(ev: &leptos::ev::Event) -> Vec<(String, bool)> {
    use wasm_bindgen::JsCast;

    let select = event_target::<web_sys::HtmlSelectElement>(ev);
    let options = select.options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|option| (option.value(), option.selected()))
        .collect()
}

#[cfg(feature = "ssr")]
fn scan_options(_ev: &leptos::ev::Event) -> Vec<(String, bool)> {
    Vec::new()
}

/// Multi-select with a label.
///
/// Every change reports the full list of options with their selected state.
#[component]
pub fn MultiSelectField(
    /// Field label text
    label: &'static str,
    /// Control name
    name: &'static str,
    /// Values currently selected
    #[prop(into)]
    selected: Signal<Vec<&'static str>>,
    /// Called with `(value, selected)` for every option
    on_change: Callback<Vec<(String, bool)>>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="mb-3 space-y-2">
            <label for=name class="form-label block text-sm font-medium">{label}</label>
            <select
                multiple
                id=name
                name=name
                class="form-control w-100"
                on:change=move |ev| on_change.run(scan_options(&ev))
            >
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option
                            value=val
                            prop:selected=move || selected.with(|s| s.contains(&val))
                        >
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// First file picked in the input that fired `ev`
#[cfg(not(feature = "ssr"))]
fn picked_file(ev: &leptos::ev::Event) -> Option<FileHandle> {
    event_target::<web_sys::HtmlInputElement>(ev)
        .files()
        .and_then(|files| files.get(0))
}

#[cfg(feature = "ssr")]
fn picked_file(_ev: &leptos::ev::Event) -> Option<FileHandle> {
    None
}

/// File input with a label.
///
/// The browser keeps the picked file; `empty` clears the control when the
/// owning state drops its file (e.g. after a form reset).
#[component]
pub fn FileField(
    /// Field label text
    label: &'static str,
    /// Control name
    name: &'static str,
    /// Advisory `accept` filter
    #[prop(default = "*/*")]
    accept: &'static str,
    /// Whether the bound state currently holds no file
    #[prop(into)]
    empty: Signal<bool>,
    /// Called with the picked file, or `None` when the selection is cleared
    on_change: Callback<Option<FileHandle>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Effects never run on the server, so this is a no-op during SSR
    Effect::new(move |_| {
        if empty.get() {
            if let Some(input) = input_ref.get() {
                input.set_value("");
            }
        }
    });

    view! {
        <div class="mb-3 space-y-2">
            <label for=name class="form-label block text-sm font-medium">{label}</label>
            <input
                type="file"
                id=name
                name=name
                accept=accept
                class="form-control w-100"
                node_ref=input_ref
                on:change=move |ev| on_change.run(picked_file(&ev))
            />
        </div>
    }
}

/// Checkbox with a label; reports its `checked` state
#[component]
pub fn CheckboxField(
    /// Field label text
    label: &'static str,
    /// Control name, passed to the change handler
    name: &'static str,
    /// Current checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change handler
    on_change: FieldHandler,
) -> impl IntoView {
    view! {
        <div class="form-check mb-3">
            <input
                type="checkbox"
                id=name
                name=name
                class="form-check-input"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run((name, FieldInput::Checked(event_target_checked(&ev))))
            />
            <label for=name class="form-check-label">{label}</label>
        </div>
    }
}
