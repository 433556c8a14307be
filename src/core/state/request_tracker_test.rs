use super::*;

#[test]
fn single_visit_is_current() {
    let mut tracker = RequestTracker::default();
    let ticket = tracker.begin();
    assert!(tracker.is_current(ticket));
}

#[test]
fn newer_visit_supersedes_older() {
    let mut tracker = RequestTracker::default();
    let first = tracker.begin();
    let second = tracker.begin();
    assert!(first < second);
    assert!(!tracker.is_current(first));
    assert!(tracker.is_current(second));
}

#[test]
fn default_ticket_is_never_current_after_a_visit() {
    let mut tracker = RequestTracker::default();
    tracker.begin();
    assert!(!tracker.is_current(Ticket::default()));
}
