//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use reviewdesk::{Notice, NoticeKind};

use crate::api;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Backend base URL in use
    pub api_base: RwSignal<String>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Pending reviews in the last loaded listing
    pub pending_reviews: RwSignal<usize>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// How long a toast stays up, in milliseconds
pub fn toast_duration(kind: NoticeKind) -> u32 {
    match kind {
        NoticeKind::Success => 3000,
        NoticeKind::Error => 5000,
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api_base: create_rw_signal(api::get_api_base()),
        loading: create_rw_signal(false),
        pending_reviews: create_rw_signal(0),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(toast_duration(NoticeKind::Success), move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(toast_duration(NoticeKind::Error), move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Route a notice to the matching toast
    pub fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => self.show_success(&notice.message),
            NoticeKind::Error => self.show_error(&notice.message),
        }
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Store a new backend URL and switch to it
    pub fn set_api_base(&self, url: &str) {
        if url.trim().is_empty() {
            api::reset_api_base();
        } else {
            api::set_api_base(url);
        }
        self.api_base.set(api::get_api_base());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_stay_up_longer() {
        assert!(toast_duration(NoticeKind::Error) > toast_duration(NoticeKind::Success));
        assert_eq!(toast_duration(NoticeKind::Success), 3000);
    }
}
