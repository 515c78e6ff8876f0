//! Course creation page

use leptos::prelude::*;
use leptos_meta::Title;

use super::layout::PageLayout;
use crate::ui::courses::CreateCourseForm;

#[component]
pub fn CreateCoursePage() -> impl IntoView {
    view! {
        <Title text="Create Course - Kursy Online"/>
        <PageLayout>
            <CreateCourseForm />
        </PageLayout>
    }
}
