#[cfg(test)]
#[path = "use_toast_test.rs"]
mod use_toast_test;

#[cfg(not(test))]
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::core::state::{Toast, ToastState};
use crate::models::{Flash, Severity};

#[cfg(test)]
use super::test_support::toast_elapsed;

#[cfg(not(test))]
async fn toast_elapsed() {
    TimeoutFuture::new(crate::core::state::TOAST_DURATION_MS).await;
}

/// App-wide single toast slot.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    state: RwSignal<ToastState>,
}

impl ToastHandle {
    fn new() -> Self {
        Self {
            state: RwSignal::new(ToastState::default()),
        }
    }

    pub fn current(&self) -> Option<Toast> {
        self.state.with(|s| s.current().cloned())
    }

    /// Surface a page's one-shot flash, if it carries a message.
    pub fn flash(&self, flash: &Flash) {
        if let Some(id) = self.state.try_update(|s| s.show_flash(flash)).flatten() {
            self.expire_later(id);
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Toast::new(Severity::Error, message));
    }

    pub fn dismiss(&self) {
        self.state.update(|s| s.dismiss());
    }

    fn show(&self, toast: Toast) {
        if let Some(id) = self.state.try_update(|s| s.show(toast)) {
            self.expire_later(id);
        }
    }

    fn expire_later(&self, id: Uuid) {
        let state = self.state;
        spawn_local(async move {
            toast_elapsed().await;
            state.update(|s| {
                if s.expire(id) {
                    log::debug!("toast {} expired", id);
                }
            });
        });
    }
}

pub fn provide_toast() -> ToastHandle {
    let toast = ToastHandle::new();
    provide_context(toast);
    toast
}

pub fn use_toast() -> ToastHandle {
    expect_context::<ToastHandle>()
}
