//! Pagination: the page-number strip shown under every list and the
//! normalization of the backend's list envelopes into one `Page<T>` shape.

use serde::{Deserialize, Serialize};

/// Default number of consecutive page buttons in the middle of the strip.
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// One slot of the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Computes the page buttons for `current` (1-based) out of `total` pages.
///
/// Small totals list every page. Otherwise the strip always starts with page 1
/// and ends with `total`, keeps `window` pages centered on `current` and marks
/// each gap with an ellipsis. Near either end the window is widened to absorb
/// the missing ellipsis, so for a given `total` the strip has the same number
/// of slots (`window + 4`) whatever the current page is.
///
/// This departs from the simpler rule of listing every page only while
/// `total <= window + 2` and always showing exactly `window` middle pages.
/// That rule makes the strip change width as the current page moves. Here
/// totals up to `window + 4` are listed in full, and an end-anchored strip
/// shows `window + 2` consecutive pages: `page_range(1, 50, 5)` is
/// `1 2 3 4 5 6 7 … 50`.
pub fn page_range(current: usize, total: usize, window: usize) -> Vec<PageSlot> {
    if total == 0 {
        return Vec::new();
    }
    if total <= window + 4 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let current = current.clamp(1, total);
    let half = window / 2;
    let mut slots = Vec::with_capacity(window + 4);

    if current <= half + 3 {
        // Anchored at the start: 1 2 ... window+2 … total
        slots.extend((1..=window + 2).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis);
        slots.push(PageSlot::Page(total));
    } else if current + (window - half) + 1 >= total {
        // Anchored at the end: 1 … total-window-1 ... total
        slots.push(PageSlot::Page(1));
        slots.push(PageSlot::Ellipsis);
        slots.extend((total - window - 1..=total).map(PageSlot::Page));
    } else {
        let start = current - half;
        slots.push(PageSlot::Page(1));
        slots.push(PageSlot::Ellipsis);
        slots.extend((start..start + window).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis);
        slots.push(PageSlot::Page(total));
    }

    slots
}

/// Number of pages needed for `total_count` rows, never less than 1.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 || page_size == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Canonical page of results consumed by every list view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            total_count: 0,
        }
    }

    /// 1-based row range shown as "Mostrando X–Y de N".
    pub fn display_bounds(&self, page_size: usize) -> (usize, usize) {
        if self.total_count == 0 {
            return (0, 0);
        }
        let from = (self.page - 1) * page_size + 1;
        let to = (self.page * page_size).min(self.total_count);
        (from, to)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// List envelope as sent by the backend.
///
/// Resources disagree on the shape: customers, orders and users use
/// `results/currentPage/totalPages/total*`, paginated plugins use
/// `docs/page/totalPages/totalDocs`, and some endpoints return a bare array.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Results {
        results: Vec<T>,
        #[serde(rename = "currentPage", default)]
        current_page: Option<usize>,
        #[serde(rename = "totalPages", default)]
        total_pages: Option<usize>,
        #[serde(
            rename = "totalCustomers",
            alias = "totalOrders",
            alias = "totalUsers",
            alias = "totalPayments",
            alias = "total",
            default
        )]
        total_count: Option<usize>,
    },
    Docs {
        docs: Vec<T>,
        #[serde(default)]
        page: Option<usize>,
        #[serde(rename = "totalPages", default)]
        total_pages: Option<usize>,
        #[serde(rename = "totalDocs", default)]
        total_docs: Option<usize>,
    },
    Plain(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Normalizes into a `Page`, falling back to the requested page when the
    /// backend omits it.
    pub fn into_page(self, requested_page: usize) -> Page<T> {
        let (items, page, pages, count) = match self {
            ListEnvelope::Results {
                results,
                current_page,
                total_pages,
                total_count,
            } => (results, current_page, total_pages, total_count),
            ListEnvelope::Docs {
                docs,
                page,
                total_pages,
                total_docs,
            } => (docs, page, total_pages, total_docs),
            ListEnvelope::Plain(items) => (items, Some(1), Some(1), None),
        };

        let total_count = count.unwrap_or(items.len());
        Page {
            page: page.unwrap_or(requested_page).max(1),
            total_pages: pages.unwrap_or(1).max(1),
            total_count,
            items,
        }
    }

    /// Drops the paging metadata, for endpoints that are never paginated.
    pub fn into_items(self) -> Vec<T> {
        self.into_page(1).items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Ellipsis, Page as P};

    fn ellipses(slots: &[PageSlot]) -> usize {
        slots.iter().filter(|s| **s == Ellipsis).count()
    }

    #[test]
    fn test_page_range_empty_and_single() {
        assert!(page_range(1, 0, 5).is_empty());
        assert_eq!(page_range(1, 1, 5), vec![P(1)]);
    }

    #[test]
    fn test_page_range_small_total_has_no_ellipsis() {
        assert_eq!(page_range(1, 5, 5), vec![P(1), P(2), P(3), P(4), P(5)]);
        assert_eq!(page_range(3, 7, 5).len(), 7);
        assert_eq!(ellipses(&page_range(3, 7, 5)), 0);
        assert_eq!(page_range(1, 9, 5).len(), 9);
        assert_eq!(ellipses(&page_range(1, 9, 5)), 0);
    }

    #[test]
    fn test_page_range_start_anchored() {
        assert_eq!(
            page_range(1, 50, 5),
            vec![P(1), P(2), P(3), P(4), P(5), P(6), P(7), Ellipsis, P(50)]
        );
    }

    #[test]
    fn test_page_range_centered() {
        assert_eq!(
            page_range(25, 50, 5),
            vec![P(1), Ellipsis, P(23), P(24), P(25), P(26), P(27), Ellipsis, P(50)]
        );
    }

    #[test]
    fn test_page_range_end_anchored() {
        assert_eq!(
            page_range(50, 50, 5),
            vec![P(1), Ellipsis, P(44), P(45), P(46), P(47), P(48), P(49), P(50)]
        );
    }

    #[test]
    fn test_page_range_constant_width() {
        for total in [10, 11, 20, 50, 137] {
            for current in 1..=total {
                let slots = page_range(current, total, 5);
                assert_eq!(slots.len(), 9, "current={} total={}", current, total);
                assert_eq!(slots.first(), Some(&P(1)));
                assert_eq!(slots.last(), Some(&P(total)));
                assert!(slots.contains(&P(current)));
                assert!(ellipses(&slots) >= 1 && ellipses(&slots) <= 2);
            }
        }
    }

    #[test]
    fn test_page_range_constant_width_just_above_window() {
        for total in [8, 9] {
            for current in 1..=total {
                assert_eq!(page_range(current, total, 5).len(), total);
            }
        }
    }

    #[test]
    fn test_page_range_clamps_current() {
        assert_eq!(page_range(0, 50, 5), page_range(1, 50, 5));
        assert_eq!(page_range(99, 50, 5), page_range(50, 50, 5));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_results_envelope() {
        let json = r#"{"results":[1,2,3],"currentPage":2,"totalPages":4,"totalCustomers":33}"#;
        let env: ListEnvelope<u32> = serde_json::from_str(json).unwrap();
        let page = env.into_page(1);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_count, 33);
    }

    #[test]
    fn test_results_envelope_with_orders_total() {
        let json = r#"{"results":[],"currentPage":1,"totalPages":0,"totalOrders":0}"#;
        let page = serde_json::from_str::<ListEnvelope<u32>>(json).unwrap().into_page(1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_docs_envelope() {
        let json = r#"{"docs":[7],"page":3,"totalPages":3,"totalDocs":21}"#;
        let page = serde_json::from_str::<ListEnvelope<u32>>(json).unwrap().into_page(1);
        assert_eq!(page.items, vec![7]);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_count, 21);
    }

    #[test]
    fn test_plain_array_envelope() {
        let page = serde_json::from_str::<ListEnvelope<u32>>("[4,5]").unwrap().into_page(3);
        assert_eq!(page.items, vec![4, 5]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn test_display_bounds() {
        let page = Page {
            items: vec![0; 5],
            page: 3,
            total_pages: 3,
            total_count: 25,
        };
        assert_eq!(page.display_bounds(10), (21, 25));
        assert_eq!(Page::<u8>::empty().display_bounds(10), (0, 0));
    }
}
