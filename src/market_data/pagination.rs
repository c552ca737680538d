/// Page navigation for the market listing
///
/// Upstream exposes no authoritative coin count, so the page total is the
/// fixed estimate `ESTIMATED_TOTAL_PAGES`.
use super::models::{MarketOrder, MarketsQuery};
use crate::constants::ESTIMATED_TOTAL_PAGES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: u32,
    per_page: u32,
    total_pages: u32,
}

impl PageCursor {
    pub fn new(per_page: u32) -> Self {
        Self {
            current: 1,
            per_page: per_page.max(1),
            total_pages: ESTIMATED_TOTAL_PAGES,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn can_go_to(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// Move to `page` if it is in range; returns whether the cursor moved
    pub fn go_to(&mut self, page: u32) -> bool {
        if !self.can_go_to(page) || page == self.current {
            return false;
        }
        self.current = page;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current.saturating_add(1))
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.current.saturating_sub(1))
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Listing request for the current page
    pub fn query(&self, order: MarketOrder) -> MarketsQuery {
        MarketsQuery::new()
            .order(order)
            .per_page(self.per_page)
            .page(self.current)
    }
}
