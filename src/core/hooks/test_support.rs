//! Native driving of the hooks: a local executor in place of the browser's
//! and a hand-cranked toast timer.

use std::cell::RefCell;
use std::sync::Once;

use futures::channel::oneshot;
use leptos::prelude::*;
use leptos::task::Executor;

thread_local! {
    static TOAST_TIMERS: RefCell<Vec<oneshot::Sender<()>>> = const { RefCell::new(Vec::new()) };
}

/// Reactive owner for one test, with the futures executor installed.
pub fn reactive_root() -> Owner {
    static EXECUTOR: Once = Once::new();
    EXECUTOR.call_once(|| {
        let _ = Executor::init_futures_executor();
    });
    let owner = Owner::new();
    owner.set();
    owner
}

/// Run spawned local tasks until none can progress.
pub fn run_until_stalled() {
    Executor::poll_local();
}

/// Resolves when the test fires it with [`fire_next_toast_timer`].
pub async fn toast_elapsed() {
    let (tx, rx) = oneshot::channel();
    TOAST_TIMERS.with(|timers| timers.borrow_mut().push(tx));
    let _ = rx.await;
}

/// Fire the oldest pending toast timer. Returns false when none is pending.
pub fn fire_next_toast_timer() -> bool {
    run_until_stalled();
    let next = TOAST_TIMERS.with(|timers| {
        let mut timers = timers.borrow_mut();
        if timers.is_empty() {
            None
        } else {
            Some(timers.remove(0))
        }
    });
    let fired = match next {
        Some(tx) => tx.send(()).is_ok(),
        None => false,
    };
    run_until_stalled();
    fired
}
