//! Course creation form component
//!
//! Posts the course as multipart form data and resets itself once the
//! backend has created the course.

use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{
    CourseController, CourseForm, CourseFormView, CourseLevel, FieldInput, SubmissionStatus,
    SubmissionView, Technology,
};
use crate::ui::browser::{FetchTransport, FileHandle};
use crate::ui::common::{
    CheckboxField, FileField, FormField, MultiSelectField, SelectField, StatusMessage,
    SubmitButton, TextAreaField,
};
use crate::ui::form_signals::FormSignals;

/// File handles are not `Send`, so the form lives in local storage
type CourseFormSignal = RwSignal<CourseForm<FileHandle>, LocalStorage>;

/// Form signals plus the course state they reset
#[derive(Clone)]
struct CourseSignals {
    signals: FormSignals,
    form: CourseFormSignal,
}

impl SubmissionView for CourseSignals {
    fn is_loading(&self) -> bool {
        self.signals.is_loading()
    }

    fn set_loading(&self, loading: bool) {
        self.signals.set_loading(loading);
    }

    fn set_status(&self, status: SubmissionStatus) {
        self.signals.set_status(status);
    }
}

impl CourseFormView for CourseSignals {
    fn reset_form(&self) {
        self.form.update(|f| f.reset());
    }
}

fn level_options() -> Vec<(&'static str, &'static str)> {
    CourseLevel::ALL
        .iter()
        .map(|level| (level.as_str(), level.label()))
        .collect()
}

fn technology_options() -> Vec<(&'static str, &'static str)> {
    Technology::ALL
        .iter()
        .map(|tech| (tech.as_str(), tech.label()))
        .collect()
}

/// Course creation form component
#[component]
pub fn CreateCourseForm() -> impl IntoView {
    let form: CourseFormSignal = RwSignal::new_local(CourseForm::default());
    let signals = FormSignals::new(SubmissionStatus::Idle);
    let loading = signals.loading;
    let status = signals.status;
    let view_state = CourseSignals { signals, form };

    let on_change = Callback::new(move |(name, input): (&'static str, FieldInput)| {
        let mut applied = false;
        form.update(|f| applied = f.apply_change(name, input));
        if !applied {
            warn!("Ignoring invalid change for course field {}", name);
        }
    });

    let on_technologies = Callback::new(move |options: Vec<(String, bool)>| {
        form.update(|f| {
            f.select_technologies(options.iter().map(|(value, selected)| (value.as_str(), *selected)))
        });
    });

    let on_cover_image = Callback::new(move |file: Option<FileHandle>| {
        form.update(|f| f.set_cover_image(file));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let view_state = view_state.clone();
        let snapshot = form.get_untracked();

        spawn_local(async move {
            let controller = CourseController::new(FetchTransport);
            let liveness = view_state.signals.liveness.clone();
            let outcome = controller.submit(&view_state, &liveness, snapshot).await;
            log!("Course creation {}", outcome);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto p-6">
            <h1 class="text-2xl font-bold mb-6">"Create New Course"</h1>

            <StatusMessage status=status />

            <form on:submit=on_submit class="space-y-4">
                <FormField
                    label="Title"
                    name="title"
                    value=Signal::derive(move || form.with(|f| f.title.clone()))
                    on_change=on_change
                    required=true
                />

                <TextAreaField
                    label="Description"
                    name="description"
                    value=Signal::derive(move || form.with(|f| f.description.clone()))
                    on_change=on_change
                    rows=4
                    required=true
                />

                <FormField
                    label="Price"
                    name="price"
                    input_type="number"
                    value=Signal::derive(move || form.with(|f| f.price.clone()))
                    on_change=on_change
                    required=true
                    min="0"
                    step="0.01"
                />

                <SelectField
                    label="Level"
                    name="level"
                    value=Signal::derive(move || form.with(|f| f.level.as_str().to_string()))
                    on_change=on_change
                    options=level_options()
                    required=true
                />

                <MultiSelectField
                    label="Technologies"
                    name="technologies"
                    selected=Signal::derive(move || {
                        form.with(|f| f.technologies.iter().map(|t| t.as_str()).collect())
                    })
                    on_change=on_technologies
                    options=technology_options()
                />

                <FileField
                    label="Cover Image"
                    name="coverImage"
                    accept="image/*"
                    empty=Signal::derive(move || form.with(|f| f.cover_image.is_none()))
                    on_change=on_cover_image
                />

                <CheckboxField
                    label="Publish immediately"
                    name="isPublished"
                    checked=Signal::derive(move || form.with(|f| f.is_published))
                    on_change=on_change
                />

                <SubmitButton loading=loading text="Create Course" loading_text="Creating..." />
            </form>
        </div>
    }
}
