use std::cell::Cell;
use std::rc::Rc;

use futures::channel::oneshot;

use super::*;
use crate::core::hooks::provide_toast;
use crate::core::hooks::test_support::{reactive_root, run_until_stalled};
use crate::models::{ListsPayload, TaskList};

type Reply = Result<ListsPayload, ApiError>;

fn payload(titles: &[&str], flash: Option<Flash>) -> ListsPayload {
    ListsPayload {
        lists: titles
            .iter()
            .enumerate()
            .map(|(i, title)| TaskList {
                id: i as u64 + 1,
                title: title.to_string(),
                description: None,
                tasks_count: None,
            })
            .collect(),
        flash,
    }
}

fn error_flash(message: &str) -> Option<Flash> {
    Some(Flash {
        success: None,
        error: Some(message.to_string()),
    })
}

/// A request that resolves when the returned sender fires.
fn gated() -> (oneshot::Sender<Reply>, impl Future<Output = Reply>) {
    let (tx, rx) = oneshot::channel::<Reply>();
    let request = async move {
        rx.await
            .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_string())))
    };
    (tx, request)
}

fn settled_slot() -> (Rc<Cell<Option<bool>>>, impl FnOnce(bool) + 'static) {
    let slot = Rc::new(Cell::new(None));
    let sink = slot.clone();
    (slot, move |ok| sink.set(Some(ok)))
}

fn titles(page: &PageSnapshot<ListsPayload>) -> Option<Vec<String>> {
    page.with(|p| p.map(|p| p.lists.iter().map(|l| l.title.clone()).collect()))
}

#[test]
fn adopts_response_and_shows_its_flash() {
    let _owner = reactive_root();
    let toast = provide_toast();
    let page = PageSnapshot::<ListsPayload>::new(toast);
    let (settled, on_settled) = settled_slot();

    let flash = Flash {
        success: Some("List created".to_string()),
        error: None,
    };
    let reply = payload(&["Home"], Some(flash));
    page.visit(async move { Ok(reply) }, on_settled);
    assert!(page.is_loading());
    run_until_stalled();

    assert_eq!(settled.get(), Some(true));
    assert!(!page.is_loading());
    assert_eq!(titles(&page), Some(vec!["Home".to_string()]));
    let shown = toast.current().unwrap();
    assert!(shown.is_success());
    assert_eq!(shown.message, "List created");
}

#[test]
fn superseded_response_keeps_newer_props() {
    let _owner = reactive_root();
    let page = PageSnapshot::<ListsPayload>::new(provide_toast());

    let (slow_tx, slow) = gated();
    page.visit(slow, |_| {});
    let (fast_tx, fast) = gated();
    page.visit(fast, |_| {});

    let _ = fast_tx.send(Ok(payload(&["Fresh"], None)));
    run_until_stalled();
    let _ = slow_tx.send(Ok(payload(&["Stale"], None)));
    run_until_stalled();

    assert_eq!(titles(&page), Some(vec!["Fresh".to_string()]));
    assert!(!page.is_loading());
}

#[test]
fn superseded_mutation_still_reports_its_error_flash() {
    let _owner = reactive_root();
    let toast = provide_toast();
    let page = PageSnapshot::<ListsPayload>::new(toast);

    let (save_tx, save) = gated();
    let (settled, on_settled) = settled_slot();
    page.visit(save, on_settled);
    let (load_tx, load) = gated();
    page.visit(load, |_| {});

    let _ = save_tx.send(Ok(payload(&["Stale"], error_flash("Could not save list."))));
    run_until_stalled();

    assert_eq!(settled.get(), Some(false));
    assert_eq!(titles(&page), None);
    let shown = toast.current().unwrap();
    assert!(!shown.is_success());
    assert_eq!(shown.message, "Could not save list.");
    assert!(page.is_loading());

    let _ = load_tx.send(Ok(payload(&["Home"], None)));
    run_until_stalled();
    assert_eq!(titles(&page), Some(vec!["Home".to_string()]));
}

#[test]
fn error_flash_on_current_response_is_a_failed_settle() {
    let _owner = reactive_root();
    let page = PageSnapshot::<ListsPayload>::new(provide_toast());
    let (settled, on_settled) = settled_slot();

    let reply = payload(&["Home"], error_flash("Title is taken."));
    page.visit(async move { Ok(reply) }, on_settled);
    run_until_stalled();

    assert_eq!(settled.get(), Some(false));
    assert_eq!(titles(&page), Some(vec!["Home".to_string()]));
}

#[test]
fn request_error_becomes_error_toast() {
    let _owner = reactive_root();
    let toast = provide_toast();
    let page = PageSnapshot::<ListsPayload>::new(toast);
    let (settled, on_settled) = settled_slot();

    page.visit(
        async { Err(ApiError::Network("offline".to_string())) },
        on_settled,
    );
    run_until_stalled();

    assert_eq!(settled.get(), Some(false));
    assert!(!page.is_loading());
    assert_eq!(titles(&page), None);
    let shown = toast.current().unwrap();
    assert!(!shown.is_success());
    assert_eq!(shown.message, crate::core::services::error::REQUEST_FAILED);
}
