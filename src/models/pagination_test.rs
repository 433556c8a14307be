use super::*;
use PageLink::{Gap, Page};

fn page_of(data: Vec<u32>, current: u32, last: u32, total: u64, from: Option<u64>, to: Option<u64>) -> Paginated<u32> {
    Paginated {
        data,
        current_page: current,
        last_page: last,
        per_page: 10,
        total,
        from,
        to,
    }
}

#[test]
fn deserializes_laravel_paginator() {
    let json = r#"{
        "data": [1, 2],
        "current_page": 2,
        "last_page": 2,
        "per_page": 10,
        "total": 12,
        "from": 11,
        "to": 12,
        "links": [],
        "path": "/tasks"
    }"#;
    let page: Paginated<u32> = serde_json::from_str(json).unwrap();
    assert_eq!(page.data, vec![1, 2]);
    assert_eq!(page.from, Some(11));
    assert!(page.range_matches_data());
    assert!(page.has_previous());
    assert!(!page.has_next());
}

#[test]
fn empty_page_has_null_range() {
    let json = r#"{"data":[],"current_page":1,"last_page":1,"per_page":10,"total":0,"from":null,"to":null}"#;
    let page: Paginated<u32> = serde_json::from_str(json).unwrap();
    assert!(page.range_matches_data());
    assert_eq!(page.range_label(), "No results");
}

#[test]
fn range_mismatch_detected() {
    let page = page_of(vec![1, 2, 3], 1, 2, 12, Some(1), Some(10));
    assert!(!page.range_matches_data());
    let page = page_of(vec![], 1, 1, 0, Some(1), None);
    assert!(!page.range_matches_data());
}

#[test]
fn range_label_uses_backend_numbers() {
    let page = page_of((0..10).collect(), 1, 3, 25, Some(1), Some(10));
    assert_eq!(page.range_label(), "Showing 1 to 10 of 25 results");
}

#[test]
fn links_for_short_collections_are_contiguous() {
    assert_eq!(page_links(1, 1), vec![Page(1)]);
    assert_eq!(page_links(1, 3), vec![Page(1), Page(2), Page(3)]);
    assert_eq!(page_links(2, 4), vec![Page(1), Page(2), Page(3), Page(4)]);
}

#[test]
fn links_insert_gaps_around_current() {
    assert_eq!(
        page_links(5, 10),
        vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
    );
}

#[test]
fn single_hidden_page_is_shown_instead_of_gap() {
    assert_eq!(
        page_links(4, 10),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
    );
}

#[test]
fn links_clamp_out_of_range_current() {
    assert_eq!(page_links(9, 3), vec![Page(1), Page(2), Page(3)]);
    assert!(page_links(1, 0).is_empty());
}

#[test]
fn default_is_an_empty_first_page() {
    let page: Paginated<u32> = Paginated::default();
    assert!(!page.has_previous());
    assert!(!page.has_next());
    assert!(page.range_matches_data());
}
