#[cfg(test)]
#[path = "use_page_test.rs"]
mod use_page_test;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::use_toast::ToastHandle;
use crate::core::services::ApiError;
use crate::core::state::RequestTracker;
use crate::models::{Flash, PageProps};

/// The latest page props the backend sent. Only a backend response ever
/// replaces them.
pub struct PageSnapshot<P: Send + Sync + 'static> {
    props: RwSignal<Option<P>>,
    loading: RwSignal<bool>,
    tracker: RwSignal<RequestTracker>,
    toast: ToastHandle,
}

impl<P: Send + Sync + 'static> Clone for PageSnapshot<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static> Copy for PageSnapshot<P> {}

impl<P> PageSnapshot<P>
where
    P: PageProps + Clone + Send + Sync + 'static,
{
    pub fn new(toast: ToastHandle) -> Self {
        Self {
            props: RwSignal::new(None),
            loading: RwSignal::new(false),
            tracker: RwSignal::new(RequestTracker::default()),
            toast,
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(Option<&P>) -> R) -> R {
        self.props.with(|p| f(p.as_ref()))
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Run `request` and adopt its response as the new snapshot, unless a
    /// later visit has started meanwhile. Errors become an error toast.
    /// `on_settled` always runs; it gets false for a failed request or an
    /// error flash.
    pub fn visit<F>(&self, request: F, on_settled: impl FnOnce(bool) + 'static)
    where
        F: Future<Output = Result<P, ApiError>> + 'static,
    {
        let Some(ticket) = self.tracker.try_update(|t| t.begin()) else {
            return;
        };
        self.loading.set(true);

        let this = *self;
        spawn_local(async move {
            let result = request.await;
            let current = this
                .tracker
                .try_with_untracked(|t| t.is_current(ticket))
                .unwrap_or(false);
            if current {
                this.loading.set(false);
            }

            match result {
                Ok(props) => {
                    // The flash is one-shot, so it surfaces even when the
                    // props are stale.
                    let failed = props.flash().is_some_and(Flash::is_failure);
                    if let Some(flash) = props.flash() {
                        this.toast.flash(flash);
                    }
                    if current {
                        this.props.set(Some(props));
                    } else {
                        log::debug!("dropping props of superseded visit {:?}", ticket);
                    }
                    on_settled(!failed);
                }
                Err(err) => {
                    log::warn!("visit failed: {}", err);
                    this.toast.error(err.toast_message());
                    on_settled(false);
                }
            }
        });
    }
}
