//! Reactive loading/status pair owned by a mounted form

use leptos::prelude::*;

use crate::core::{Liveness, SubmissionStatus, SubmissionView};

/// Loading flag, status and liveness of one form instance.
///
/// Created inside a component: the liveness token is killed when the
/// component is cleaned up, so a response that arrives later is dropped.
#[derive(Clone)]
pub struct FormSignals {
    pub loading: RwSignal<bool>,
    pub status: RwSignal<SubmissionStatus>,
    pub liveness: Liveness,
}

impl FormSignals {
    pub fn new(initial: SubmissionStatus) -> Self {
        let liveness = Liveness::new();
        let on_unmount = liveness.clone();
        on_cleanup(move || on_unmount.kill());

        Self {
            loading: RwSignal::new(false),
            status: RwSignal::new(initial),
            liveness,
        }
    }
}

impl SubmissionView for FormSignals {
    fn is_loading(&self) -> bool {
        self.loading.get_untracked()
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_status(&self, status: SubmissionStatus) {
        self.status.set(status);
    }
}
