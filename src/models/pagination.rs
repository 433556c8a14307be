#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use serde::{Deserialize, Serialize};

/// One page of a backend-paginated collection.
///
/// `from`/`to` are the 1-based inclusive positions of `data` within `total`;
/// the backend sends them as `null` for an empty page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Gap,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
            from: None,
            to: None,
        }
    }
}

impl<T> Paginated<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Whether `from`/`to` agree with the number of rows actually present.
    pub fn range_matches_data(&self) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                from >= 1 && to >= from && to <= self.total && (to - from + 1) as usize == self.data.len()
            }
            (None, None) => self.data.is_empty(),
            _ => false,
        }
    }

    pub fn range_label(&self) -> String {
        match (self.from, self.to) {
            (Some(from), Some(to)) => format!("Showing {} to {} of {} results", from, to, self.total),
            _ => "No results".to_string(),
        }
    }

}

/// First, last and the neighbours of the current page, with gaps between
/// runs. A gap that would hide a single page shows that page instead.
pub fn page_links(current: u32, last: u32) -> Vec<PageLink> {
    if last == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, last);
    let mut pages = vec![1, last, current];
    if current > 1 {
        pages.push(current - 1);
    }
    if current < last {
        pages.push(current + 1);
    }
    pages.sort_unstable();
    pages.dedup();

    let mut links = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<u32> = None;
    for page in pages {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                2 => links.push(PageLink::Page(prev + 1)),
                _ => links.push(PageLink::Gap),
            }
        }
        links.push(PageLink::Page(page));
        previous = Some(page);
    }
    links
}
