//! Page-number window for the pagination bar.

use crate::models::{PageSlot, PaginationInfo};

use PageSlot::{Ellipsis, Page};

/// Largest page count that is rendered without any ellipsis.
const MAX_SLOTS: u32 = 7;

/// Compute the slots of the pagination bar for `current_page` out of
/// `total_pages`. Never yields more than seven slots.
pub fn page_range(current_page: u32, total_pages: u32) -> Vec<PageSlot> {
    if total_pages <= MAX_SLOTS {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 3 {
        return vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Ellipsis,
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }

    if current_page >= total_pages - 2 {
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(total_pages - 3),
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }

    vec![
        Page(1),
        Ellipsis,
        Page(current_page - 1),
        Page(current_page),
        Page(current_page + 1),
        Ellipsis,
        Page(total_pages),
    ]
}

impl PaginationInfo {
    /// Page the bar is centered on; a missing page counts as the first one.
    pub fn current(&self) -> u32 {
        self.current_page.unwrap_or(1).max(1)
    }

    pub fn page_range(&self) -> Vec<PageSlot> {
        page_range(self.current(), self.total_pages.unwrap_or(0))
    }

    /// Target of the "Previous" button, if the API reports a previous page.
    pub fn previous_target(&self) -> Option<u32> {
        self.previous_page
            .filter(|page| *page > 0)
            .map(|_| self.current().saturating_sub(1).max(1))
    }

    /// Target of the "Next" button, if the API reports a next page.
    pub fn next_target(&self) -> Option<u32> {
        self.next_page
            .filter(|page| *page > 0)
            .map(|_| self.current().saturating_add(1))
    }
}
