//! Page frame shared by every page: header with navigation, content, footer

use leptos::prelude::*;
use leptos_router::components::A;

/// Header, main content area and footer
#[component]
pub fn PageLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            // Header
            <header class="border-b border-theme">
                <nav class="max-w-7xl mx-auto px-4 flex items-center justify-between h-16">
                    <A href="/" attr:class="text-xl font-bold">"Kursy Online"</A>
                    <div class="flex items-center gap-4">
                        <A href="/courses/new" attr:class="nav-link">"Create course"</A>
                        <A href="/login" attr:class="nav-link">"Sign in"</A>
                    </div>
                </nav>
            </header>

            <main class="flex-1 container my-5">{children()}</main>

            <footer class="py-4 border-t border-theme">
                <p class="text-center text-sm text-theme-tertiary">"© 2025 Kursy Online"</p>
            </footer>
        </div>
    }
}
