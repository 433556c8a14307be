use super::*;

fn value_of(cards: &[StatCard], title: &str) -> u64 {
    cards
        .iter()
        .find(|c| c.title == title)
        .map(|c| c.value)
        .unwrap()
}

#[test]
fn deserializes_camel_case() {
    let stats: DashboardStats = serde_json::from_str(
        r#"{"totalLists":3,"totalTasks":10,"completedTasks":4,"pendingTasks":6}"#,
    )
    .unwrap();
    assert_eq!(stats.total_lists, 3);
    assert_eq!(stats.total_tasks, 10);
    assert_eq!(stats.completed_tasks, 4);
    assert_eq!(stats.pending_tasks, 6);
}

#[test]
fn cards_carry_backend_values_verbatim() {
    let stats = DashboardStats {
        total_lists: 3,
        total_tasks: 10,
        completed_tasks: 4,
        pending_tasks: 6,
    };
    let cards = stats.cards();
    assert_eq!(cards.len(), 4);
    assert_eq!(value_of(&cards, "Total Lists"), 3);
    assert_eq!(value_of(&cards, "Total Tasks"), 10);
    assert_eq!(value_of(&cards, "Completed Tasks"), 4);
    assert_eq!(value_of(&cards, "Pending Tasks"), 6);
}

#[test]
fn cards_do_not_derive_counts() {
    // Inconsistent on purpose: nothing is recomputed client-side.
    let stats = DashboardStats {
        total_lists: 0,
        total_tasks: 1,
        completed_tasks: 5,
        pending_tasks: 9,
    };
    let cards = stats.cards();
    assert_eq!(value_of(&cards, "Total Tasks"), 1);
    assert_eq!(value_of(&cards, "Pending Tasks"), 9);
}

#[test]
fn missing_fields_default_to_zero() {
    let stats: DashboardStats = serde_json::from_str(r#"{"totalLists":2}"#).unwrap();
    assert_eq!(stats.total_lists, 2);
    assert_eq!(stats.total_tasks, 0);
}
