//! Home page, the landing target after a successful login

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::layout::PageLayout;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Kursy Online"/>
        <PageLayout>
            <div class="text-center py-10">
                <h1 class="text-3xl font-bold mb-4">"Kursy Online"</h1>
                <p class="text-theme-secondary mb-8">"Learn programming with hands-on courses."</p>
                <div class="flex items-center justify-center gap-4">
                    <A href="/courses/new" attr:class="btn btn-primary">"Create a course"</A>
                    <A href="/login" attr:class="btn btn-secondary">"Sign in"</A>
                </div>
            </div>
        </PageLayout>
    }
}
